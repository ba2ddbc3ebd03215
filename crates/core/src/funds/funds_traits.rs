use crate::errors::Result;
use crate::funds::funds_model::Fund;

/// Read-only catalog of valid funds.
pub trait FundsCatalogTrait: Send + Sync {
    /// Fails with `Error::Unavailable` when the catalog cannot be reached.
    fn list_funds(&self) -> Result<Vec<Fund>>;

    fn find_fund(&self, fund_id: &str) -> Result<Option<Fund>> {
        Ok(self
            .list_funds()?
            .into_iter()
            .find(|fund| fund.fund_id == fund_id))
    }
}
