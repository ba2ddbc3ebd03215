//! fundledger core - domain entities, services, and traits.
//!
//! This crate contains the investment ledger rules, contribution validation,
//! region policy and the demo session manager. It is storage-agnostic and
//! defines the key-value trait implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod funds;
pub mod ledger;
pub mod region;
pub mod session;
pub mod storage;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
