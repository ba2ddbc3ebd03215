use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use log::{debug, error, info, warn};
use uuid::Uuid;

use super::profile_sources::{EmployeeProfileSource, ProfileSourceTrait, RetailProfileSource};
use super::session_errors::AuthError;
use super::session_model::{ProfileDetails, Session, SessionState, UserRole};
use super::session_traits::SessionServiceTrait;
use crate::constants::SESSION_KEY;
use crate::errors::Result;
use crate::storage::KeyValueStoreTrait;

pub struct SessionService {
    kv: Arc<dyn KeyValueStoreTrait>,
    profiles: Vec<Arc<dyn ProfileSourceTrait>>,
}

impl SessionService {
    pub fn new(
        kv: Arc<dyn KeyValueStoreTrait>,
        profiles: Vec<Arc<dyn ProfileSourceTrait>>,
    ) -> Self {
        SessionService { kv, profiles }
    }

    /// Session manager with the default employee and retail demo profiles.
    pub fn with_default_profiles(kv: Arc<dyn KeyValueStoreTrait>) -> Self {
        Self::new(
            kv,
            vec![
                Arc::new(EmployeeProfileSource::default()),
                Arc::new(RetailProfileSource::default()),
            ],
        )
    }

    fn profile_source(&self, role: UserRole) -> Option<&Arc<dyn ProfileSourceTrait>> {
        self.profiles.iter().find(|source| source.role() == role)
    }

    async fn discard_stored_session(&self) {
        if let Err(e) = self.kv.delete(SESSION_KEY).await {
            error!("Failed to clear session from storage: {}", e);
        }
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    async fn login(&self, email: &str, password: &str, role: UserRole) -> Result<Session> {
        let source = self
            .profile_source(role)
            .ok_or(AuthError::InvalidCredentials)?;
        if !source.credentials().matches(email, password) {
            warn!("Rejected {} login for '{}'", role, email);
            return Err(AuthError::InvalidCredentials.into());
        }

        let session = Session {
            email: email.to_string(),
            role,
            session_id: Uuid::new_v4().to_string(),
            // Stored with millisecond precision.
            issued_at: Utc::now().trunc_subsecs(3),
        };
        let json = serde_json::to_string(&session)?;
        self.kv.put(SESSION_KEY, &json).await?;

        info!("Started {} session for '{}'", role, email);
        Ok(session)
    }

    async fn current_session(&self) -> Option<Session> {
        let raw = match self.kv.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!("Failed to get session from storage: {}", e);
                return None;
            }
        };

        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                self.discard_stored_session().await;
                return None;
            }
        };

        if session.is_expired_at(Utc::now()) {
            debug!(
                "Session {} expired at {}",
                session.session_id,
                session.expires_at()
            );
            self.discard_stored_session().await;
            return None;
        }

        Some(session)
    }

    async fn state(&self) -> SessionState {
        match self.current_session().await {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        }
    }

    async fn require_role(&self, role: UserRole) -> Result<Session> {
        let session = self
            .current_session()
            .await
            .ok_or(AuthError::Unauthenticated)?;
        if session.role != role {
            return Err(AuthError::Forbidden {
                required: role,
                actual: session.role,
            }
            .into());
        }
        Ok(session)
    }

    async fn logout(&self) {
        self.discard_stored_session().await;
        info!("Logged out");
    }

    fn profile_for(&self, role: UserRole) -> Option<ProfileDetails> {
        self.profile_source(role).map(|source| source.profile())
    }
}
