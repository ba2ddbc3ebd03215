use super::funds_model::Fund;
use super::funds_traits::FundsCatalogTrait;
use crate::errors::Result;

/// Catalog backed by a fixed list.
pub struct StaticFundsCatalog {
    funds: Vec<Fund>,
}

impl StaticFundsCatalog {
    pub fn new(funds: Vec<Fund>) -> Self {
        StaticFundsCatalog { funds }
    }
}

impl Default for StaticFundsCatalog {
    fn default() -> Self {
        StaticFundsCatalog::new(vec![Fund::demo()])
    }
}

impl FundsCatalogTrait for StaticFundsCatalog {
    fn list_funds(&self) -> Result<Vec<Fund>> {
        Ok(self.funds.clone())
    }
}
