//! Database model for key-value entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One stored document, keyed by its namespaced key
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::kv_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KvEntryDB {
    pub entry_key: String,
    pub entry_value: String,
    pub updated_at: NaiveDateTime,
}
