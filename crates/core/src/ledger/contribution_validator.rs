//! Checks a proposed contribution against the region cap, the funds catalog
//! and the current ledger snapshot. Pure: no I/O, no state changes.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::ledger_errors::ContributionError;
use super::ledger_model::{ContributionRequest, InvestmentLedgerState, ValidatedContribution};
use crate::funds::Fund;
use crate::region::RegionConfig;

pub fn validate_contribution(
    config: &RegionConfig,
    state: &InvestmentLedgerState,
    funds: &[Fund],
    request: &ContributionRequest,
) -> Result<ValidatedContribution, ContributionError> {
    let amount = parse_amount(request.amount)?;

    // Ids are matched exactly; a padded id is not in the catalog.
    if request.fund_id.trim().is_empty() {
        return Err(ContributionError::FundRequired);
    }
    let fund = funds
        .iter()
        .find(|fund| fund.fund_id == request.fund_id)
        .cloned()
        .ok_or(ContributionError::FundRequired)?;

    let current_total = state.total_investment;
    let max = config.max_investment_amount;
    let remaining = max - current_total;
    let cap_exceeded = ContributionError::CapExceeded {
        requested: amount,
        remaining,
        max,
    };

    // Both forms are checked; the second one catches a stale remaining figure.
    let new_total = match current_total.checked_add(amount) {
        Some(total) if amount <= remaining && total <= max => total,
        _ => return Err(cap_exceeded),
    };

    Ok(ValidatedContribution {
        fund,
        amount,
        remaining_capacity_after: max - new_total,
    })
}

fn parse_amount(raw: f64) -> Result<Decimal, ContributionError> {
    if !raw.is_finite() || raw <= 0.0 {
        return Err(ContributionError::InvalidAmount);
    }
    match Decimal::from_f64(raw) {
        Some(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(ContributionError::InvalidAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::FundContribution;
    use rust_decimal_macros::dec;

    fn funds() -> Vec<Fund> {
        vec![Fund::new("f1", "Global Index"), Fund::new("f2", "Bond Fund")]
    }

    fn ledger_with_total(total: Decimal) -> InvestmentLedgerState {
        InvestmentLedgerState::empty()
            .with_contribution(&FundContribution::new("f1", "Global Index", total))
            .unwrap()
    }

    fn validate(
        state: &InvestmentLedgerState,
        fund_id: &str,
        amount: f64,
    ) -> Result<ValidatedContribution, ContributionError> {
        validate_contribution(
            &RegionConfig::fallback(),
            state,
            &funds(),
            &ContributionRequest::new(fund_id, amount),
        )
    }

    #[test]
    fn test_rejects_zero_and_negative_amounts() {
        let state = InvestmentLedgerState::empty();
        assert_eq!(validate(&state, "f1", 0.0), Err(ContributionError::InvalidAmount));
        assert_eq!(validate(&state, "f1", -5.0), Err(ContributionError::InvalidAmount));
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        let state = InvestmentLedgerState::empty();
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                validate(&state, "f1", amount),
                Err(ContributionError::InvalidAmount)
            );
        }
    }

    #[test]
    fn test_accepts_amount_of_one() {
        let state = InvestmentLedgerState::empty();
        let validated = validate(&state, "f1", 1.0).unwrap();
        assert_eq!(validated.amount, dec!(1));
        assert_eq!(validated.remaining_capacity_after, dec!(19999));
    }

    #[test]
    fn test_rejects_missing_or_unknown_fund() {
        let state = InvestmentLedgerState::empty();
        assert_eq!(validate(&state, "", 100.0), Err(ContributionError::FundRequired));
        assert_eq!(validate(&state, "   ", 100.0), Err(ContributionError::FundRequired));
        assert_eq!(
            validate(&state, "unknown", 100.0),
            Err(ContributionError::FundRequired)
        );
    }

    #[test]
    fn test_padded_fund_id_is_not_in_catalog() {
        let state = InvestmentLedgerState::empty();
        assert_eq!(validate(&state, " f1 ", 100.0), Err(ContributionError::FundRequired));
        assert_eq!(validate(&state, "f1\n", 100.0), Err(ContributionError::FundRequired));
    }

    #[test]
    fn test_total_near_decimal_max_is_rejected_without_overflow() {
        let state = ledger_with_total(Decimal::MAX);
        assert!(matches!(
            validate(&state, "f1", 1.0),
            Err(ContributionError::CapExceeded { .. })
        ));
    }

    #[test]
    fn test_invalid_amount_is_reported_before_missing_fund() {
        let state = InvestmentLedgerState::empty();
        assert_eq!(validate(&state, "", 0.0), Err(ContributionError::InvalidAmount));
    }

    #[test]
    fn test_cap_boundary() {
        let state = ledger_with_total(dec!(18000));

        let validated = validate(&state, "f2", 2000.0).unwrap();
        assert_eq!(validated.remaining_capacity_after, Decimal::ZERO);

        let err = validate(&state, "f2", 2001.0).unwrap_err();
        assert_eq!(
            err,
            ContributionError::CapExceeded {
                requested: dec!(2001),
                remaining: dec!(2000),
                max: dec!(20000),
            }
        );
        assert_eq!(err.code(), "CAP_EXCEEDED");
    }

    #[test]
    fn test_stale_total_over_cap_rejects_everything() {
        let state = ledger_with_total(dec!(20500));
        assert!(matches!(
            validate(&state, "f1", 1.0),
            Err(ContributionError::CapExceeded { .. })
        ));
    }

    #[test]
    fn test_returns_catalog_fund_name() {
        let state = InvestmentLedgerState::empty();
        let validated = validate(&state, "f2", 250.5).unwrap();
        assert_eq!(validated.fund.fund_name, "Bond Fund");
        assert_eq!(validated.amount, dec!(250.5));
        let contribution = validated.to_fund_contribution();
        assert_eq!(contribution.fund_id, "f2");
        assert_eq!(contribution.invested_amount, dec!(250.5));
    }
}
