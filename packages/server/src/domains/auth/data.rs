use juniper::{GraphQLObject, ID};

use crate::domains::auth::actions::AuthResult;
use crate::domains::auth::models::{Role, UserAccount};

/// User GraphQL data type
///
/// Public API representation of an account; the password hash stays behind
/// the boundary.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "User")]
pub struct UserData {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<UserAccount> for UserData {
    fn from(user: UserAccount) -> Self {
        Self {
            id: ID::new(user.id.to_hex()),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Result of `register` and `login`: a signed credential plus the account.
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(name = "AuthPayload")]
pub struct AuthPayloadData {
    pub token: String,
    pub user: UserData,
}

impl From<AuthResult> for AuthPayloadData {
    fn from(result: AuthResult) -> Self {
        Self {
            token: result.token,
            user: result.user.into(),
        }
    }
}
