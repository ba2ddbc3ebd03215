//! Region policy domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, FALLBACK_COUNTRY_LABEL, FALLBACK_CURRENCY_CODE,
    FALLBACK_CURRENCY_SYMBOL, FALLBACK_MAX_INVESTMENT_AMOUNT,
};

/// Regional investment ceiling and currency display rules.
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    pub country_label: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub max_investment_amount: Decimal,
}

impl RegionConfig {
    /// Configuration used when the region source cannot be reached.
    pub fn fallback() -> Self {
        RegionConfig {
            country_label: FALLBACK_COUNTRY_LABEL.to_string(),
            currency_code: FALLBACK_CURRENCY_CODE.to_string(),
            currency_symbol: FALLBACK_CURRENCY_SYMBOL.to_string(),
            max_investment_amount: Decimal::from(FALLBACK_MAX_INVESTMENT_AMOUNT),
        }
    }

    /// Capacity left under the cap for a given total, never negative.
    pub fn remaining_capacity(&self, current_total: Decimal) -> Decimal {
        (self.max_investment_amount - current_total).max(Decimal::ZERO)
    }

    /// Formats an amount with the currency symbol and thousands grouping,
    /// e.g. `£18,000` or `£1,234.50`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let fraction = abs - whole;

        let grouped = group_thousands(&whole.normalize().to_string());
        if fraction.is_zero() {
            format!("{}{}{}", sign, self.currency_symbol, grouped)
        } else {
            let fraction_str = format!("{:.2}", fraction);
            format!(
                "{}{}{}{}",
                sign,
                self.currency_symbol,
                grouped,
                fraction_str.trim_start_matches('0')
            )
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
