//! Session domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SESSION_TTL_HOURS;
use crate::errors::{Error, ValidationError};

/// The two fixed login profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Retail,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Retail => "retail",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Retail => "Retail Customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" => Ok(UserRole::Employee),
            "retail" => Ok(UserRole::Retail),
            other => Err(
                ValidationError::InvalidInput(format!("Unknown role '{}'", other)).into(),
            ),
        }
    }
}

/// Time-boxed proof of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: UserRole,
    pub session_id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.issued_at > Duration::hours(SESSION_TTL_HOURS)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + Duration::hours(SESSION_TTL_HOURS)
    }
}

/// Observable session state. `Authenticating` is transient inside `login`,
/// and expired or logged-out sessions collapse back to `Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(session),
        }
    }
}

/// A login pair supplied by configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Display data attached to a login profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ProfileDetails {
    #[serde(rename_all = "camelCase")]
    Employee { user_name: String, company: String },
    #[serde(rename_all = "camelCase")]
    Retail {
        first_name: String,
        last_name: String,
        member_since: String,
    },
}

impl ProfileDetails {
    pub fn display_name(&self) -> String {
        match self {
            ProfileDetails::Employee { user_name, .. } => user_name.clone(),
            ProfileDetails::Retail {
                first_name,
                last_name,
                ..
            } => format!("{} {}", first_name, last_name),
        }
    }
}
