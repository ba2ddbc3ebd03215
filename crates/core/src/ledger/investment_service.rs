use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::contribution_validator::validate_contribution;
use super::ledger_model::{
    ContributionRequest, InvestmentLedgerState, InvestmentReceipt, PortfolioSummary,
};
use super::ledger_traits::{InvestmentServiceTrait, LedgerServiceTrait};
use crate::errors::Result;
use crate::funds::FundsCatalogTrait;
use crate::region::RegionServiceTrait;

pub struct InvestmentService {
    ledger: Arc<dyn LedgerServiceTrait>,
    region_service: Arc<dyn RegionServiceTrait>,
    funds_catalog: Arc<dyn FundsCatalogTrait>,
}

impl InvestmentService {
    pub fn new(
        ledger: Arc<dyn LedgerServiceTrait>,
        region_service: Arc<dyn RegionServiceTrait>,
        funds_catalog: Arc<dyn FundsCatalogTrait>,
    ) -> Self {
        InvestmentService {
            ledger,
            region_service,
            funds_catalog,
        }
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn portfolio(&self, customer_id: &str) -> Result<PortfolioSummary> {
        let region = self.region_service.config_or_fallback();
        let ledger = self.ledger.read(customer_id)?;
        let remaining_capacity = region.remaining_capacity(ledger.total_investment);
        Ok(PortfolioSummary {
            ledger,
            region,
            remaining_capacity,
        })
    }

    async fn invest(
        &self,
        customer_id: &str,
        request: ContributionRequest,
    ) -> Result<InvestmentReceipt> {
        let region = self.region_service.config_or_fallback();
        let funds = self.funds_catalog.list_funds()?;
        let current = self.ledger.read(customer_id)?;

        let validated = validate_contribution(&region, &current, &funds, &request)?;
        debug!(
            "Contribution of {} to '{}' accepted for '{}'",
            validated.amount, validated.fund.fund_id, customer_id
        );

        let ledger = self
            .ledger
            .apply_contribution(customer_id, validated.to_fund_contribution())
            .await?;
        Ok(InvestmentReceipt {
            ledger,
            remaining_capacity: validated.remaining_capacity_after,
        })
    }

    async fn clear(&self, customer_id: &str) -> Result<InvestmentLedgerState> {
        self.ledger.reset(customer_id).await
    }
}
