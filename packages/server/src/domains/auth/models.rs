use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Account role. Closed set: the authorization gate matches on variants,
/// never on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, juniper::GraphQLEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[graphql(name = "Role")]
pub enum Role {
    Admin,
    Employee,
}

/// User account document.
///
/// `password_hash` is an argon2 PHC string and never crosses the API
/// boundary; the GraphQL layer exposes accounts through `UserData` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    pub role: Role,
}

/// Fields for creating a new account. The id is store-assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
