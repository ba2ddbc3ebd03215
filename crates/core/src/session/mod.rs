//! Session module - demo login for the employee and retail roles.

mod login_validation;
mod profile_sources;
mod session_errors;
mod session_model;
mod session_service;
mod session_traits;


pub use login_validation::{validate_email, validate_login_input, validate_password};
pub use profile_sources::{EmployeeProfileSource, ProfileSourceTrait, RetailProfileSource};
pub use session_errors::AuthError;
pub use session_model::{Credentials, ProfileDetails, Session, SessionState, UserRole};
pub use session_service::SessionService;
pub use session_traits::SessionServiceTrait;
