//! Region module - investment cap and currency display policy.

mod region_model;
mod region_service;
mod region_traits;

pub use region_model::RegionConfig;
pub use region_service::{RegionService, StaticRegionPolicy, UnavailableRegionPolicy};
pub use region_traits::{RegionPolicyTrait, RegionServiceTrait};
