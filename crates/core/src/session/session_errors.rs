use thiserror::Error;

use super::session_model::UserRole;

/// Authentication and role-gate failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("No active session")]
    Unauthenticated,

    #[error("Session role '{actual}' cannot access '{required}' features")]
    Forbidden { required: UserRole, actual: UserRole },
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}
