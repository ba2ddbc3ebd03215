//! Form-level checks run before credentials are compared.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{Result, ValidationError};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(ValidationError::MissingField("email".to_string()).into());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidInput(
            "Please enter a valid email address".to_string(),
        )
        .into());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ValidationError::MissingField("password".to_string()).into());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))
        .into());
    }
    Ok(())
}

pub fn validate_login_input(email: &str, password: &str) -> Result<()> {
    validate_email(email)?;
    validate_password(password)
}
