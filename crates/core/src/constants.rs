/// Storage key prefix for a customer's ledger (`ledger:<customerId>`)
pub const LEDGER_KEY_PREFIX: &str = "ledger:";

/// Storage key for the single persisted session
pub const SESSION_KEY: &str = "session";

/// Sessions older than this are treated as absent
pub const SESSION_TTL_HOURS: i64 = 24;

/// Fallback region used when the region source cannot be reached
pub const FALLBACK_COUNTRY_LABEL: &str = "UK";
pub const FALLBACK_CURRENCY_CODE: &str = "GBP";
pub const FALLBACK_CURRENCY_SYMBOL: &str = "£";
pub const FALLBACK_MAX_INVESTMENT_AMOUNT: i64 = 20_000;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Demo catalog entry
pub const DEMO_FUND_ID: &str = "demo_fund_equity";
pub const DEMO_FUND_NAME: &str = "Demo Equity Fund";

/// Demo credentials, overridable through configuration
pub const DEFAULT_EMPLOYEE_EMAIL: &str = "employee@fundledger.test";
pub const DEFAULT_RETAIL_EMAIL: &str = "customer@retail.test";
pub const DEFAULT_DEMO_PASSWORD: &str = "StrongPassword123";

/// Minimum password length accepted by the login form
pub const MIN_PASSWORD_LENGTH: usize = 6;
