use anyhow::{bail, Context};
use rust_decimal::Decimal;

use fundledger_core::constants::{
    DEFAULT_DEMO_PASSWORD, DEFAULT_EMPLOYEE_EMAIL, DEFAULT_RETAIL_EMAIL,
};
use fundledger_core::region::RegionConfig;
use fundledger_core::session::Credentials;

pub struct Config {
    pub db_path: String,
    pub log_format: String,
    pub employee_credentials: Credentials,
    pub retail_credentials: Credentials,
    pub region: RegionConfig,
    /// Simulates an unreachable region source.
    pub region_offline: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_path = var("FL_DB_PATH", "./data/fundledger.db");
        let log_format = var("FL_LOG_FORMAT", "text");

        let employee_credentials = Credentials::new(
            var("FL_EMPLOYEE_EMAIL", DEFAULT_EMPLOYEE_EMAIL),
            var("FL_EMPLOYEE_PASSWORD", DEFAULT_DEMO_PASSWORD),
        );
        let retail_credentials = Credentials::new(
            var("FL_RETAIL_EMAIL", DEFAULT_RETAIL_EMAIL),
            var("FL_RETAIL_PASSWORD", DEFAULT_DEMO_PASSWORD),
        );

        let fallback = RegionConfig::fallback();
        let max_investment_amount = match lookup("FL_REGION_MAX_INVESTMENT") {
            Some(raw) => raw
                .trim()
                .parse::<Decimal>()
                .with_context(|| format!("Invalid FL_REGION_MAX_INVESTMENT '{}'", raw))?,
            None => fallback.max_investment_amount,
        };
        if max_investment_amount <= Decimal::ZERO {
            bail!("FL_REGION_MAX_INVESTMENT must be greater than 0");
        }
        let region = RegionConfig {
            country_label: var("FL_REGION_COUNTRY", fallback.country_label.as_str()),
            currency_code: var("FL_REGION_CURRENCY", fallback.currency_code.as_str()),
            currency_symbol: var("FL_REGION_SYMBOL", fallback.currency_symbol.as_str()),
            max_investment_amount,
        };

        let region_offline = matches!(
            lookup("FL_REGION_OFFLINE").as_deref().map(str::trim),
            Some("1") | Some("true") | Some("yes")
        );

        Ok(Self {
            db_path,
            log_format,
            employee_credentials,
            retail_credentials,
            region,
            region_offline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.db_path, "./data/fundledger.db");
        assert_eq!(config.region, RegionConfig::fallback());
        assert_eq!(config.retail_credentials.email, DEFAULT_RETAIL_EMAIL);
        assert!(!config.region_offline);
    }

    #[test]
    fn region_overrides_are_read() {
        let config = config_from(&[
            ("FL_REGION_COUNTRY", "IE"),
            ("FL_REGION_CURRENCY", "EUR"),
            ("FL_REGION_SYMBOL", "€"),
            ("FL_REGION_MAX_INVESTMENT", "15000"),
            ("FL_REGION_OFFLINE", "true"),
        ])
        .unwrap();
        assert_eq!(config.region.currency_symbol, "€");
        assert_eq!(config.region.max_investment_amount, Decimal::from(15000));
        assert!(config.region_offline);
    }

    #[test]
    fn invalid_cap_is_rejected() {
        assert!(config_from(&[("FL_REGION_MAX_INVESTMENT", "lots")]).is_err());
        assert!(config_from(&[("FL_REGION_MAX_INVESTMENT", "0")]).is_err());
    }
}
