//! GraphQL client for integration testing.
//!
//! Executes GraphQL documents directly against the schema without HTTP
//! overhead, backed by the in-memory stores.

use juniper::Variables;
use serde_json::Value;
use std::sync::Arc;

use server_core::domains::auth::models::Role;
use server_core::domains::auth::JwtService;
use server_core::domains::employees::models::{Employee, NewEmployee};
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use server_core::server::middleware::AuthUser;
use server_core::store::{EmployeeStore, MemoryEmployeeStore, MemoryUserStore};

/// Shared in-memory backend for one test. Clients created from the same
/// backend see the same data, so a test can act under several identities.
pub struct TestBackend {
    pub employees: Arc<MemoryEmployeeStore>,
    pub users: Arc<MemoryUserStore>,
    pub jwt_service: Arc<JwtService>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            employees: Arc::new(MemoryEmployeeStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            jwt_service: Arc::new(JwtService::new("test_secret_key")),
        }
    }

    fn context(&self, auth_user: Option<AuthUser>) -> GraphQLContext {
        GraphQLContext::new(
            self.employees.clone(),
            self.users.clone(),
            self.jwt_service.clone(),
            auth_user,
        )
    }

    /// Client with no identity (anonymous request).
    pub fn anonymous(&self) -> GraphQLClient {
        GraphQLClient::new(self.context(None))
    }

    /// Client with a fabricated identity of the given role.
    pub fn with_role(&self, role: Role) -> GraphQLClient {
        self.with_identity(
            &bson::oid::ObjectId::new().to_hex(),
            role,
            "someone@example.com",
        )
    }

    /// Client with a fully specified identity.
    pub fn with_identity(&self, user_id: &str, role: Role, email: &str) -> GraphQLClient {
        let auth_user = AuthUser {
            user_id: user_id.to_string(),
            role,
            email: email.to_string(),
        };
        GraphQLClient::new(self.context(Some(auth_user)))
    }

    /// Insert a record directly, bypassing the API.
    pub async fn seed_employee(&self, new: NewEmployee) -> Employee {
        self.employees
            .insert(new)
            .await
            .expect("seeding the in-memory store cannot fail")
    }
}

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<String>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let name = result.get("employee.name");
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl GraphQLClient {
    pub fn new(context: GraphQLContext) -> Self {
        Self {
            schema: create_schema(),
            context,
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        match juniper::execute(query, None, &self.schema, &variables, &self.context).await {
            Ok((value, errors)) => {
                let data =
                    Some(serde_json::to_value(&value).expect("Failed to serialize GraphQL result"));
                let error_messages = errors
                    .iter()
                    .map(|e| e.error().message().to_string())
                    .collect();
                GraphQLResult {
                    data,
                    errors: error_messages,
                }
            }
            // Parse/validation failures never carry data
            Err(e) => GraphQLResult {
                data: None,
                errors: vec![e.to_string()],
            },
        }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
