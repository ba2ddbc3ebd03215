use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::KvEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::kv_entries;
use crate::schema::kv_entries::dsl::*;
use fundledger_core::errors::Result;
use fundledger_core::storage::KeyValueStoreTrait;

pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SqliteKeyValueStore { pool, writer }
    }
}

#[async_trait]
impl KeyValueStoreTrait for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let value = kv_entries
            .filter(entry_key.eq(key))
            .select(entry_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let entry = KvEntryDB {
            entry_key: key.to_string(),
            entry_value: value.to_string(),
            updated_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn| {
                diesel::replace_into(kv_entries::table)
                    .values(&entry)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                debug!("Stored entry '{}'", entry.entry_key);
                Ok(())
            })
            .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let key_owned = key.to_string();

        self.writer
            .exec(move |conn| {
                let removed = diesel::delete(kv_entries.filter(entry_key.eq(&key_owned)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                debug!("Deleted entry '{}' ({} rows)", key_owned, removed);
                Ok(())
            })
            .await
    }
}
