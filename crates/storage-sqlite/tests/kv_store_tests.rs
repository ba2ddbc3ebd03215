use std::sync::Arc;

use fundledger_core::constants::{DEFAULT_DEMO_PASSWORD, DEFAULT_RETAIL_EMAIL};
use fundledger_core::ledger::{FundContribution, LedgerService, LedgerServiceTrait};
use fundledger_core::session::{SessionService, SessionServiceTrait, UserRole};
use fundledger_core::storage::KeyValueStoreTrait;
use fundledger_storage_sqlite::db::{self, write_actor};
use fundledger_storage_sqlite::SqliteKeyValueStore;
use rust_decimal_macros::dec;
use tempfile::{tempdir, TempDir};

fn open_store(dir: &TempDir) -> Arc<SqliteKeyValueStore> {
    let db_path = dir.path().join("nested").join("ledger.db");
    let db_path = db::init(db_path.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = write_actor::spawn_writer((*pool).clone());
    Arc::new(SqliteKeyValueStore::new(pool, writer))
}

#[tokio::test]
async fn put_get_delete_round_trip() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);

    assert_eq!(store.get("ledger:c1").unwrap(), None);

    store.put("ledger:c1", r#"{"a":1}"#).await.unwrap();
    assert_eq!(store.get("ledger:c1").unwrap().as_deref(), Some(r#"{"a":1}"#));

    store.put("ledger:c1", r#"{"a":2}"#).await.unwrap();
    assert_eq!(store.get("ledger:c1").unwrap().as_deref(), Some(r#"{"a":2}"#));

    store.delete("ledger:c1").await.unwrap();
    assert_eq!(store.get("ledger:c1").unwrap(), None);

    // Deleting a missing key is not an error.
    store.delete("ledger:c1").await.unwrap();
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("ledger.db");
    let db_path = db::init(db_path.to_str().unwrap()).unwrap();
    let pool = db::create_pool(&db_path).unwrap();
    db::run_migrations(&pool).unwrap();
    db::run_migrations(&pool).unwrap();
}

#[tokio::test]
async fn ledger_survives_reopening_the_database() {
    let dir = tempdir().unwrap();

    {
        let store = open_store(&dir);
        let ledger = LedgerService::new(store);
        ledger
            .apply_contribution("c1", FundContribution::new("f1", "Global Index", dec!(500)))
            .await
            .unwrap();
        ledger
            .apply_contribution("c1", FundContribution::new("f1", "Global Index", dec!(300)))
            .await
            .unwrap();
    }

    let reopened = LedgerService::new(open_store(&dir));
    let state = reopened.read("c1").unwrap();
    assert_eq!(state.total_investment, dec!(800));
    assert_eq!(state.funds.len(), 1);
    assert_eq!(state.funds[0].invested_amount, dec!(800));
}

#[tokio::test]
async fn corrupt_ledger_row_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);
    store.put("ledger:c1", "<<garbage>>").await.unwrap();

    let ledger = LedgerService::new(store);
    assert!(ledger.read("c1").unwrap().is_empty());
}

#[tokio::test]
async fn session_lifecycle_on_sqlite() {
    let dir = tempdir().unwrap();
    let store = open_store(&dir);
    let sessions = SessionService::with_default_profiles(store.clone());

    let session = sessions
        .login(DEFAULT_RETAIL_EMAIL, DEFAULT_DEMO_PASSWORD, UserRole::Retail)
        .await
        .unwrap();
    assert_eq!(sessions.current_session().await, Some(session));

    let raw = store.get("session").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["role"], "retail");

    sessions.logout().await;
    assert_eq!(store.get("session").unwrap(), None);
    assert_eq!(sessions.current_session().await, None);
}
