use crate::errors::Result;
use crate::ledger::ledger_model::{
    ContributionRequest, FundContribution, InvestmentLedgerState, InvestmentReceipt,
    PortfolioSummary,
};
use async_trait::async_trait;

/// Trait for ledger operations on a single customer's fund allocations
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Returns the empty state when nothing is stored.
    fn read(&self, customer_id: &str) -> Result<InvestmentLedgerState>;

    /// Not idempotent: retrying after a successful write double-counts.
    async fn apply_contribution(
        &self,
        customer_id: &str,
        contribution: FundContribution,
    ) -> Result<InvestmentLedgerState>;

    async fn reset(&self, customer_id: &str) -> Result<InvestmentLedgerState>;
}

/// Trait for the validate-then-apply investment flow
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn portfolio(&self, customer_id: &str) -> Result<PortfolioSummary>;

    async fn invest(
        &self,
        customer_id: &str,
        request: ContributionRequest,
    ) -> Result<InvestmentReceipt>;

    async fn clear(&self, customer_id: &str) -> Result<InvestmentLedgerState>;
}
