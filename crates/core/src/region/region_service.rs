use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::region_model::RegionConfig;
use super::region_traits::{RegionPolicyTrait, RegionServiceTrait};
use crate::errors::{Error, Result};

/// Policy that always serves the configuration it was built with.
pub struct StaticRegionPolicy {
    config: RegionConfig,
}

impl StaticRegionPolicy {
    pub fn new(config: RegionConfig) -> Self {
        StaticRegionPolicy { config }
    }
}

impl RegionPolicyTrait for StaticRegionPolicy {
    fn get_config(&self) -> Result<RegionConfig> {
        Ok(self.config.clone())
    }
}

/// Policy whose source is unreachable.
pub struct UnavailableRegionPolicy {
    reason: String,
}

impl UnavailableRegionPolicy {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableRegionPolicy {
            reason: reason.into(),
        }
    }
}

impl RegionPolicyTrait for UnavailableRegionPolicy {
    fn get_config(&self) -> Result<RegionConfig> {
        Err(Error::Unavailable(format!(
            "region policy: {}",
            self.reason
        )))
    }
}

pub struct RegionService {
    policy: Arc<dyn RegionPolicyTrait>,
}

impl RegionService {
    pub fn new(policy: Arc<dyn RegionPolicyTrait>) -> Self {
        RegionService { policy }
    }
}

impl RegionServiceTrait for RegionService {
    fn get_config(&self) -> Result<RegionConfig> {
        let config = self.policy.get_config()?;
        if config.max_investment_amount <= Decimal::ZERO {
            return Err(Error::Unavailable(format!(
                "region policy returned a non-positive cap for {}",
                config.country_label
            )));
        }
        debug!(
            "Region config loaded: {} ({})",
            config.country_label, config.currency_code
        );
        Ok(config)
    }

    fn config_or_fallback(&self) -> RegionConfig {
        match self.get_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using fallback region configuration: {}", e);
                RegionConfig::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ireland() -> RegionConfig {
        RegionConfig {
            country_label: "IE".to_string(),
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            max_investment_amount: dec!(15000),
        }
    }

    #[test]
    fn test_static_policy_is_served() {
        let service = RegionService::new(Arc::new(StaticRegionPolicy::new(ireland())));
        assert_eq!(service.get_config().unwrap(), ireland());
        assert_eq!(service.config_or_fallback(), ireland());
    }

    #[test]
    fn test_unavailable_policy_reports_error() {
        let service = RegionService::new(Arc::new(UnavailableRegionPolicy::new("offline")));
        let err = service.get_config().unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
        assert_eq!(err.code(), "UNAVAILABLE");
    }

    #[test]
    fn test_unavailable_policy_degrades_to_fallback() {
        let service = RegionService::new(Arc::new(UnavailableRegionPolicy::new("offline")));
        assert_eq!(service.config_or_fallback(), RegionConfig::fallback());
    }

    #[test]
    fn test_non_positive_cap_is_rejected() {
        let mut config = ireland();
        config.max_investment_amount = Decimal::ZERO;
        let service = RegionService::new(Arc::new(StaticRegionPolicy::new(config)));
        assert!(service.get_config().is_err());
        assert_eq!(service.config_or_fallback(), RegionConfig::fallback());
    }
}
