//! Funds module - the catalog of funds a customer may invest in.

mod funds_catalog;
mod funds_model;
mod funds_traits;

pub use funds_catalog::StaticFundsCatalog;
pub use funds_model::Fund;
pub use funds_traits::FundsCatalogTrait;
