//! Funds catalog domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEMO_FUND_ID, DEMO_FUND_NAME};

/// A fund that customers can contribute to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub fund_id: String,
    pub fund_name: String,
}

impl Fund {
    pub fn new(fund_id: impl Into<String>, fund_name: impl Into<String>) -> Self {
        Fund {
            fund_id: fund_id.into(),
            fund_name: fund_name.into(),
        }
    }

    pub fn demo() -> Self {
        Fund::new(DEMO_FUND_ID, DEMO_FUND_NAME)
    }
}
