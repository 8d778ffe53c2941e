//! Auth domain actions - business logic for account registration and login.
//!
//! Actions are async functions called directly from GraphQL mutations.
//! Neither operation requires an authenticated caller.

use tracing::{debug, info};

use crate::common::ApiError;
use crate::domains::auth::jwt::JwtService;
use crate::domains::auth::models::{NewUser, Role, UserAccount};
use crate::domains::auth::password;
use crate::store::UserStore;

/// A freshly issued credential together with the account it asserts.
pub struct AuthResult {
    pub token: String,
    pub user: UserAccount,
}

/// Create an account and sign it in.
///
/// Fails with `DuplicateEmail` when the email is already registered. The
/// role defaults to `EMPLOYEE` when the caller supplies none.
pub async fn register(
    name: String,
    email: String,
    password: String,
    role: Option<Role>,
    users: &dyn UserStore,
    jwt: &JwtService,
) -> Result<AuthResult, ApiError> {
    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = password::hash_password(&password)?;
    let user = users
        .insert(NewUser {
            name,
            email,
            password_hash,
            role: role.unwrap_or(Role::Employee),
        })
        .await?;

    info!(user_id = %user.id, role = ?user.role, "Registered new account");

    let token = jwt.issue(&user.id.to_hex(), user.role, &user.email)?;
    Ok(AuthResult { token, user })
}

/// Verify credentials and sign in.
///
/// Unknown email and wrong password collapse into the same
/// `InvalidCredentials` fault so the response does not reveal which
/// half was wrong.
pub async fn login(
    email: String,
    password: String,
    users: &dyn UserStore,
    jwt: &JwtService,
) -> Result<AuthResult, ApiError> {
    let Some(user) = users.find_by_email(&email).await? else {
        debug!(%email, "Login attempt for unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !password::verify_password(&password, &user.password_hash) {
        debug!(user_id = %user.id, "Login attempt with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = jwt.issue(&user.id.to_hex(), user.role, &user.email)?;
    Ok(AuthResult { token, user })
}
