//! Ledger module - fund allocations, contribution rules, and persistence.

mod contribution_validator;
mod investment_service;
mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_store;
mod ledger_traits;


pub use contribution_validator::validate_contribution;
pub use investment_service::InvestmentService;
pub use ledger_errors::ContributionError;
pub use ledger_model::{
    ContributionRequest, FundContribution, InvestmentLedgerState, InvestmentReceipt,
    PortfolioSummary, ValidatedContribution,
};
pub use ledger_service::LedgerService;
pub use ledger_store::LedgerStore;
pub use ledger_traits::{InvestmentServiceTrait, LedgerServiceTrait};
