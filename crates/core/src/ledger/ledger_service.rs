use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, error, info};
use rust_decimal::Decimal;

use super::ledger_errors::ContributionError;
use super::ledger_model::{FundContribution, InvestmentLedgerState};
use super::ledger_store::LedgerStore;
use super::ledger_traits::LedgerServiceTrait;
use crate::errors::{Result, ValidationError};
use crate::storage::KeyValueStoreTrait;

/// Owns the cached ledger state per customer and writes every mutation
/// through to the store before returning.
pub struct LedgerService {
    store: LedgerStore,
    cache: DashMap<String, InvestmentLedgerState>,
}

impl LedgerService {
    pub fn new(kv: Arc<dyn KeyValueStoreTrait>) -> Self {
        LedgerService {
            store: LedgerStore::new(kv),
            cache: DashMap::new(),
        }
    }

    fn ensure_customer_id(customer_id: &str) -> Result<()> {
        if customer_id.trim().is_empty() {
            return Err(ValidationError::MissingField("customerId".to_string()).into());
        }
        Ok(())
    }

    async fn commit(
        &self,
        customer_id: &str,
        state: InvestmentLedgerState,
    ) -> Result<InvestmentLedgerState> {
        // The cache keeps the new state even if the write below fails.
        self.cache.insert(customer_id.to_string(), state.clone());
        self.store.save(customer_id, &state).await.map_err(|e| {
            error!("Failed to persist ledger for '{}': {}", customer_id, e);
            e
        })?;
        Ok(state)
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    fn read(&self, customer_id: &str) -> Result<InvestmentLedgerState> {
        Self::ensure_customer_id(customer_id)?;
        if let Some(state) = self.cache.get(customer_id) {
            return Ok(state.clone());
        }

        let state = self.store.load(customer_id)?.unwrap_or_default();
        debug!(
            "Loaded ledger for '{}' from store ({} funds)",
            customer_id,
            state.funds.len()
        );
        self.cache.insert(customer_id.to_string(), state.clone());
        Ok(state)
    }

    async fn apply_contribution(
        &self,
        customer_id: &str,
        contribution: FundContribution,
    ) -> Result<InvestmentLedgerState> {
        Self::ensure_customer_id(customer_id)?;
        if contribution.fund_id.trim().is_empty() {
            return Err(ContributionError::FundRequired.into());
        }
        if contribution.invested_amount < Decimal::ZERO {
            return Err(ContributionError::InvalidAmount.into());
        }

        let current = self.read(customer_id)?;
        let updated = current.with_contribution(&contribution)?;
        let updated = self.commit(customer_id, updated).await?;

        info!(
            "Applied {} to fund '{}' for '{}'; total is now {}",
            contribution.invested_amount,
            contribution.fund_id,
            customer_id,
            updated.total_investment
        );
        Ok(updated)
    }

    async fn reset(&self, customer_id: &str) -> Result<InvestmentLedgerState> {
        Self::ensure_customer_id(customer_id)?;
        let cleared = self
            .commit(customer_id, InvestmentLedgerState::empty())
            .await?;
        info!("Cleared all funds for '{}'", customer_id);
        Ok(cleared)
    }
}
