//! Credential and profile sources, one per login role.

use super::session_model::{Credentials, ProfileDetails, UserRole};
use crate::constants::{DEFAULT_DEMO_PASSWORD, DEFAULT_EMPLOYEE_EMAIL, DEFAULT_RETAIL_EMAIL};

/// Supplies the fixed credentials and display profile for one role.
pub trait ProfileSourceTrait: Send + Sync {
    fn role(&self) -> UserRole;
    fn credentials(&self) -> &Credentials;
    fn profile(&self) -> ProfileDetails;
}

pub struct EmployeeProfileSource {
    credentials: Credentials,
    user_name: String,
    company: String,
}

impl EmployeeProfileSource {
    pub fn new(credentials: Credentials) -> Self {
        EmployeeProfileSource {
            credentials,
            user_name: "employee_1".to_string(),
            company: "Demo Corporation".to_string(),
        }
    }
}

impl Default for EmployeeProfileSource {
    fn default() -> Self {
        EmployeeProfileSource::new(Credentials::new(
            DEFAULT_EMPLOYEE_EMAIL,
            DEFAULT_DEMO_PASSWORD,
        ))
    }
}

impl ProfileSourceTrait for EmployeeProfileSource {
    fn role(&self) -> UserRole {
        UserRole::Employee
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn profile(&self) -> ProfileDetails {
        ProfileDetails::Employee {
            user_name: self.user_name.clone(),
            company: self.company.clone(),
        }
    }
}

pub struct RetailProfileSource {
    credentials: Credentials,
    first_name: String,
    last_name: String,
    member_since: String,
}

impl RetailProfileSource {
    pub fn new(credentials: Credentials) -> Self {
        RetailProfileSource {
            credentials,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            member_since: "2023".to_string(),
        }
    }
}

impl Default for RetailProfileSource {
    fn default() -> Self {
        RetailProfileSource::new(Credentials::new(DEFAULT_RETAIL_EMAIL, DEFAULT_DEMO_PASSWORD))
    }
}

impl ProfileSourceTrait for RetailProfileSource {
    fn role(&self) -> UserRole {
        UserRole::Retail
    }

    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn profile(&self) -> ProfileDetails {
        ProfileDetails::Retail {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            member_since: self.member_since.clone(),
        }
    }
}
