//! API error taxonomy.
//!
//! Every fault a resolver can raise maps to exactly one of these variants;
//! the dispatch boundary renders each as a single `{message}` entry in the
//! GraphQL error list. Store failures pass through unmodified.

use juniper::{FieldError, IntoFieldError, ScalarValue};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No valid identity where one is required.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Identity present but role insufficient.
    #[error("Not authorized")]
    Unauthorized,

    /// Login with an unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an already-used email.
    #[error("User with this email already exists")]
    DuplicateEmail,

    /// Update target id does not exist.
    #[error("Employee not found")]
    NotFound,

    /// Malformed or missing input, detected before any store round-trip.
    #[error("{0}")]
    Validation(String),

    /// Persistence failure, propagated verbatim.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl<S: ScalarValue> IntoFieldError<S> for ApiError {
    fn into_field_error(self) -> FieldError<S> {
        FieldError::new(self.to_string(), juniper::Value::null())
    }
}
