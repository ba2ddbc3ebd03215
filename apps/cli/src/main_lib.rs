use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use fundledger_core::{
    funds::{FundsCatalogTrait, StaticFundsCatalog},
    ledger::{InvestmentService, InvestmentServiceTrait, LedgerService},
    region::{
        RegionPolicyTrait, RegionService, RegionServiceTrait, StaticRegionPolicy,
        UnavailableRegionPolicy,
    },
    session::{EmployeeProfileSource, RetailProfileSource, SessionService, SessionServiceTrait},
    storage::KeyValueStoreTrait,
};
use fundledger_storage_sqlite::{
    db::{self, write_actor},
    SqliteKeyValueStore,
};

pub struct AppState {
    pub session_service: Arc<dyn SessionServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub region_service: Arc<dyn RegionServiceTrait>,
    pub funds_catalog: Arc<dyn FundsCatalogTrait>,
}

/// Installs the global subscriber. Logs go to stderr so command output stays clean.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let db_path = db::init(&config.db_path)?;
    tracing::debug!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());
    let kv: Arc<dyn KeyValueStoreTrait> = Arc::new(SqliteKeyValueStore::new(pool, writer));

    let session_service = Arc::new(SessionService::new(
        kv.clone(),
        vec![
            Arc::new(EmployeeProfileSource::new(
                config.employee_credentials.clone(),
            )),
            Arc::new(RetailProfileSource::new(config.retail_credentials.clone())),
        ],
    ));

    let region_policy: Arc<dyn RegionPolicyTrait> = if config.region_offline {
        Arc::new(UnavailableRegionPolicy::new("region source is offline"))
    } else {
        Arc::new(StaticRegionPolicy::new(config.region.clone()))
    };
    let region_service = Arc::new(RegionService::new(region_policy));
    let funds_catalog = Arc::new(StaticFundsCatalog::default());

    let ledger_service = Arc::new(LedgerService::new(kv));
    let investment_service = Arc::new(InvestmentService::new(
        ledger_service,
        region_service.clone(),
        funds_catalog.clone(),
    ));

    Ok(AppState {
        session_service,
        investment_service,
        region_service,
        funds_catalog,
    })
}
