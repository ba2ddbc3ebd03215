//! Property-based tests for the investment ledger and contribution rules.
//!
//! These tests verify that universal properties hold across generated
//! contribution sequences, using the `proptest` crate.

use std::sync::Arc;

use fundledger_core::funds::Fund;
use fundledger_core::ledger::{
    validate_contribution, ContributionError, ContributionRequest, FundContribution,
    InvestmentLedgerState, LedgerService, LedgerServiceTrait,
};
use fundledger_core::region::RegionConfig;
use fundledger_core::storage::InMemoryKeyValueStore;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a contribution against a small pool of fund ids so that
/// sequences hit both the "existing fund" and "new fund" paths.
fn arb_contribution() -> impl Strategy<Value = FundContribution> {
    (prop_oneof![Just("f1"), Just("f2"), Just("f3"), Just("f4")], arb_amount()).prop_map(
        |(fund_id, amount)| FundContribution::new(fund_id, format!("Fund {}", fund_id), amount),
    )
}

fn arb_contributions(max_count: usize) -> impl Strategy<Value = Vec<FundContribution>> {
    proptest::collection::vec(arb_contribution(), 0..=max_count)
}

fn build_ledger(contributions: &[FundContribution]) -> InvestmentLedgerState {
    contributions
        .iter()
        .fold(InvestmentLedgerState::empty(), |state, c| {
            state.with_contribution(c).unwrap()
        })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The total after a contribution equals the previous total plus the amount.
    #[test]
    fn prop_total_grows_by_contribution_amount(
        history in arb_contributions(20),
        next in arb_contribution(),
    ) {
        let before = build_ledger(&history);
        let after = before.with_contribution(&next).unwrap();
        prop_assert_eq!(after.total_investment, before.total_investment + next.invested_amount);
    }

    /// The total always reconciles with the per-fund amounts.
    #[test]
    fn prop_total_equals_sum_of_funds(history in arb_contributions(30)) {
        let state = build_ledger(&history);
        prop_assert!(state.is_consistent());
        prop_assert!(state.has_valid_entries());
    }

    /// Existing funds grow in place; new funds add exactly one entry.
    #[test]
    fn prop_fund_count_changes_only_for_new_funds(
        history in arb_contributions(20),
        next in arb_contribution(),
    ) {
        let before = build_ledger(&history);
        let existed = before.fund(&next.fund_id).map(|f| f.invested_amount);
        let after = before.with_contribution(&next).unwrap();

        match existed {
            Some(previous) => {
                prop_assert_eq!(after.funds.len(), before.funds.len());
                prop_assert_eq!(
                    after.fund(&next.fund_id).unwrap().invested_amount,
                    previous + next.invested_amount
                );
            }
            None => prop_assert_eq!(after.funds.len(), before.funds.len() + 1),
        }
    }

    /// Reset always yields the empty ledger, whatever came before.
    #[test]
    fn prop_reset_yields_empty(history in arb_contributions(15)) {
        let rt = runtime();
        let service = LedgerService::new(Arc::new(InMemoryKeyValueStore::new()));
        let state = rt.block_on(async {
            for c in history {
                service.apply_contribution("c1", c).await.unwrap();
            }
            service.reset("c1").await.unwrap()
        });
        prop_assert_eq!(state, InvestmentLedgerState::empty());
        prop_assert!(service.read("c1").unwrap().is_empty());
    }

    /// Accepted contributions never push the total over the cap, and positive
    /// contributions to a known fund are rejected exactly when they would.
    #[test]
    fn prop_validator_enforces_cap(
        current in 0i64..=20_000,
        amount in 1i64..=25_000,
    ) {
        let config = RegionConfig::fallback();
        let state = build_ledger(&[FundContribution::new("f1", "Fund f1", Decimal::from(current))]);
        let funds = vec![Fund::new("f1", "Fund f1")];
        let request = ContributionRequest::new("f1", Decimal::from(amount).to_f64().unwrap());

        match validate_contribution(&config, &state, &funds, &request) {
            Ok(validated) => {
                prop_assert!(Decimal::from(current + amount) <= config.max_investment_amount);
                prop_assert_eq!(
                    validated.remaining_capacity_after,
                    config.max_investment_amount - Decimal::from(current + amount)
                );
            }
            Err(ContributionError::CapExceeded { .. }) => {
                prop_assert!(Decimal::from(current + amount) > config.max_investment_amount);
            }
            Err(other) => prop_assert!(false, "unexpected rejection: {:?}", other),
        }
    }
}
