use std::sync::Arc;

use crate::common::ApiError;
use crate::domains::auth::models::Role;
use crate::domains::auth::JwtService;
use crate::server::middleware::AuthUser;
use crate::store::{EmployeeStore, UserStore};

/// GraphQL request context
///
/// Shared store handles and the token codec, plus the per-request identity
/// resolved by the JWT middleware (absent for anonymous requests).
#[derive(Clone)]
pub struct GraphQLContext {
    pub employees: Arc<dyn EmployeeStore>,
    pub users: Arc<dyn UserStore>,
    pub jwt_service: Arc<JwtService>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        users: Arc<dyn UserStore>,
        jwt_service: Arc<JwtService>,
        auth_user: Option<AuthUser>,
    ) -> Self {
        Self {
            employees,
            users,
            jwt_service,
            auth_user,
        }
    }

    /// Require an authenticated identity.
    pub fn require_auth(&self) -> Result<&AuthUser, ApiError> {
        self.auth_user.as_ref().ok_or(ApiError::Unauthenticated)
    }

    /// Require an authenticated identity whose role is in the allowed set.
    pub fn require_role(&self, allowed: &[Role]) -> Result<&AuthUser, ApiError> {
        let user = self.require_auth()?;
        if !allowed.contains(&user.role) {
            return Err(ApiError::Unauthorized);
        }
        Ok(user)
    }
}
