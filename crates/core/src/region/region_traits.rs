use crate::errors::Result;
use crate::region::region_model::RegionConfig;

/// Source of the regional investment policy.
pub trait RegionPolicyTrait: Send + Sync {
    /// Fails with `Error::Unavailable` when the region source cannot be reached.
    fn get_config(&self) -> Result<RegionConfig>;
}

/// Trait for region service operations
pub trait RegionServiceTrait: Send + Sync {
    fn get_config(&self) -> Result<RegionConfig>;

    /// Never fails: degrades to `RegionConfig::fallback()` and logs the cause.
    fn config_or_fallback(&self) -> RegionConfig;
}
