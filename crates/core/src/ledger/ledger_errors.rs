use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a proposed contribution is rejected.
///
/// All of these are user-correctable; none is ever auto-corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContributionError {
    #[error("Investment amount is required and must be greater than 0")]
    InvalidAmount,

    #[error("Please select a fund")]
    FundRequired,

    #[error("Maximum additional investment allowed: {remaining} (requested {requested}, cap {max})")]
    CapExceeded {
        requested: Decimal,
        remaining: Decimal,
        max: Decimal,
    },
}

impl ContributionError {
    pub fn code(&self) -> &'static str {
        match self {
            ContributionError::InvalidAmount => "INVALID_AMOUNT",
            ContributionError::FundRequired => "FUND_REQUIRED",
            ContributionError::CapExceeded { .. } => "CAP_EXCEEDED",
        }
    }
}
