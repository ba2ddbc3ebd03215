use crate::errors::Result;
use crate::session::session_model::{ProfileDetails, Session, SessionState, UserRole};
use async_trait::async_trait;

/// Trait for the demo session manager
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    /// Fails with `AuthError::InvalidCredentials` on mismatch; nothing is persisted then.
    async fn login(&self, email: &str, password: &str, role: UserRole) -> Result<Session>;

    /// Expired or unreadable sessions are removed and reported as `None`.
    async fn current_session(&self) -> Option<Session>;

    async fn state(&self) -> SessionState;

    async fn require_role(&self, role: UserRole) -> Result<Session>;

    /// Always succeeds from the caller's point of view.
    async fn logout(&self);

    fn profile_for(&self, role: UserRole) -> Option<ProfileDetails>;
}
