//! Investment ledger domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ledger_errors::ContributionError;
use crate::funds::Fund;
use crate::region::RegionConfig;

/// Money allocated to one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundContribution {
    pub fund_id: String,
    pub fund_name: String,
    pub invested_amount: Decimal,
}

impl FundContribution {
    pub fn new(
        fund_id: impl Into<String>,
        fund_name: impl Into<String>,
        invested_amount: Decimal,
    ) -> Self {
        FundContribution {
            fund_id: fund_id.into(),
            fund_name: fund_name.into(),
            invested_amount,
        }
    }
}

/// Authoritative record of one customer's total and per-fund amounts.
///
/// `total_investment` always equals the sum of `funds[i].invested_amount`,
/// and `fund_id`s are unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentLedgerState {
    pub total_investment: Decimal,
    #[serde(default)]
    pub funds: Vec<FundContribution>,
}

impl InvestmentLedgerState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty() && self.total_investment.is_zero()
    }

    pub fn fund(&self, fund_id: &str) -> Option<&FundContribution> {
        self.funds.iter().find(|fund| fund.fund_id == fund_id)
    }

    /// Sum of the per-fund amounts, or `None` if it overflows `Decimal`.
    pub fn sum_of_funds(&self) -> Option<Decimal> {
        sum_amounts(&self.funds)
    }

    /// True when the total reconciles with the per-fund amounts.
    pub fn is_consistent(&self) -> bool {
        self.sum_of_funds() == Some(self.total_investment)
    }

    /// True when every entry has a non-empty unique id and a non-negative
    /// amount, and the amounts can be summed.
    pub fn has_valid_entries(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        let entries_ok = self.funds.iter().all(|fund| {
            !fund.fund_id.is_empty()
                && fund.invested_amount >= Decimal::ZERO
                && seen.insert(fund.fund_id.as_str())
        });
        entries_ok && self.sum_of_funds().is_some()
    }

    /// Returns the state after merging `contribution`: an existing fund's
    /// amount grows cumulatively, a new fund is appended.
    ///
    /// Fails with `InvalidAmount` when the new amounts cannot be represented.
    pub fn with_contribution(
        &self,
        contribution: &FundContribution,
    ) -> Result<InvestmentLedgerState, ContributionError> {
        let mut funds = self.funds.clone();
        match funds
            .iter_mut()
            .find(|fund| fund.fund_id == contribution.fund_id)
        {
            Some(existing) => {
                existing.invested_amount = existing
                    .invested_amount
                    .checked_add(contribution.invested_amount)
                    .ok_or(ContributionError::InvalidAmount)?;
            }
            None => funds.push(contribution.clone()),
        }

        let total_investment = sum_amounts(&funds).ok_or(ContributionError::InvalidAmount)?;
        Ok(InvestmentLedgerState {
            total_investment,
            funds,
        })
    }
}

fn sum_amounts(funds: &[FundContribution]) -> Option<Decimal> {
    funds
        .iter()
        .try_fold(Decimal::ZERO, |acc, fund| acc.checked_add(fund.invested_amount))
}

/// Raw contribution proposal as entered by the customer.
///
/// `amount` is kept as a float so that non-finite input reaches the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRequest {
    pub fund_id: String,
    pub amount: f64,
}

impl ContributionRequest {
    pub fn new(fund_id: impl Into<String>, amount: f64) -> Self {
        ContributionRequest {
            fund_id: fund_id.into(),
            amount,
        }
    }
}

/// A proposal that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedContribution {
    pub fund: Fund,
    pub amount: Decimal,
    pub remaining_capacity_after: Decimal,
}

impl ValidatedContribution {
    pub fn to_fund_contribution(&self) -> FundContribution {
        FundContribution::new(
            self.fund.fund_id.clone(),
            self.fund.fund_name.clone(),
            self.amount,
        )
    }
}

/// Outcome of a successful investment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReceipt {
    pub ledger: InvestmentLedgerState,
    pub remaining_capacity: Decimal,
}

/// Ledger plus the region rules needed to display it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub ledger: InvestmentLedgerState,
    pub region: RegionConfig,
    pub remaining_capacity: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_with_contribution_rejects_overflowing_total() {
        let state = InvestmentLedgerState::empty()
            .with_contribution(&FundContribution::new("f1", "Global Index", Decimal::MAX))
            .unwrap();

        let result = state.with_contribution(&FundContribution::new("f2", "Bond Fund", dec!(1)));
        assert_eq!(result, Err(ContributionError::InvalidAmount));

        let result = state.with_contribution(&FundContribution::new("f1", "Global Index", dec!(1)));
        assert_eq!(result, Err(ContributionError::InvalidAmount));
    }

    #[test]
    fn test_overflowing_sum_is_not_valid() {
        let state = InvestmentLedgerState {
            total_investment: dec!(0),
            funds: vec![
                FundContribution::new("f1", "Global Index", dec!(70000000000000000000000000000)),
                FundContribution::new("f2", "Bond Fund", dec!(70000000000000000000000000000)),
            ],
        };
        assert_eq!(state.sum_of_funds(), None);
        assert!(!state.has_valid_entries());
        assert!(!state.is_consistent());
    }
}
