use crate::domain::Task;
use crate::persistence::store::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;

/// Key holding the serialized task collection
pub const TASKS_KEY: &str = "tasks";

/// Key holding the serialized theme flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Everything read back from the store at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub dark_mode: bool,
}

/// Load tasks and theme. Never fails: a missing, unreadable or malformed
/// entry falls back to its default.
pub fn load(store: &dyn KeyValueStore) -> Snapshot {
    Snapshot {
        tasks: read_tasks(store),
        dark_mode: read_or_default(store, DARK_MODE_KEY),
    }
}

/// Decode stored tasks record by record so one damaged entry does not
/// take the rest of the collection down with it
fn read_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    let records: Vec<serde_json::Value> = read_or_default(store, TASKS_KEY);
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping unreadable stored task");
                None
            }
        })
        .collect()
}

fn read_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read stored value, using default");
            return T::default();
        }
    };

    // A stored JSON null counts as absent
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is not valid, using default");
            T::default()
        }
    }
}

/// Write the whole task collection
pub fn save_tasks(store: &dyn KeyValueStore, tasks: &[Task]) -> Result<(), StoreError> {
    let json = serde_json::to_string(tasks).map_err(|source| StoreError::Encode {
        key: TASKS_KEY.to_string(),
        source,
    })?;
    store.set(TASKS_KEY, &json)
}

/// Write the theme flag
pub fn save_dark_mode(store: &dyn KeyValueStore, dark_mode: bool) -> Result<(), StoreError> {
    let json = serde_json::to_string(&dark_mode).map_err(|source| StoreError::Encode {
        key: DARK_MODE_KEY.to_string(),
        source,
    })?;
    store.set(DARK_MODE_KEY, &json)
}
