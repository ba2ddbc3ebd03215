use std::sync::Arc;

use log::{debug, warn};

use super::ledger_model::InvestmentLedgerState;
use crate::constants::LEDGER_KEY_PREFIX;
use crate::errors::{DatabaseError, Error, Result};
use crate::storage::KeyValueStoreTrait;

/// Serializes ledger states into the key-value store under `ledger:<customerId>`.
pub struct LedgerStore {
    kv: Arc<dyn KeyValueStoreTrait>,
}

impl LedgerStore {
    pub fn new(kv: Arc<dyn KeyValueStoreTrait>) -> Self {
        LedgerStore { kv }
    }

    pub fn key_for(customer_id: &str) -> String {
        format!("{}{}", LEDGER_KEY_PREFIX, customer_id)
    }

    /// Loads a customer's ledger. Missing and unreadable records both yield `None`.
    pub fn load(&self, customer_id: &str) -> Result<Option<InvestmentLedgerState>> {
        let key = Self::key_for(customer_id);
        let raw = match self.kv.get(&key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let mut state: InvestmentLedgerState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                warn!("Discarding unreadable ledger record '{}': {}", key, e);
                return Ok(None);
            }
        };

        if !state.has_valid_entries() {
            warn!("Discarding ledger record '{}' with invalid fund entries", key);
            return Ok(None);
        }

        if let Some(sum) = state
            .sum_of_funds()
            .filter(|sum| *sum != state.total_investment)
        {
            warn!(
                "Ledger record '{}' total {} does not match fund sum {}; using fund sum",
                key, state.total_investment, sum
            );
            state.total_investment = sum;
        }

        Ok(Some(state))
    }

    pub async fn save(&self, customer_id: &str, state: &InvestmentLedgerState) -> Result<()> {
        let key = Self::key_for(customer_id);
        let json = serde_json::to_string(state)?;
        self.kv.put(&key, &json).await.map_err(|e| match e {
            Error::Persistence(_) => e,
            other => Error::Persistence(DatabaseError::WriteFailed(other.to_string())),
        })?;
        debug!("Saved ledger '{}' ({} funds)", key, state.funds.len());
        Ok(())
    }
}
