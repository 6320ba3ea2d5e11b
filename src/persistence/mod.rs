pub mod files;
pub mod snapshot;
pub mod store;

pub use files::{ensure_data_dir, get_data_dir, init_local_data_dir, logs_dir};
pub use snapshot::{load, save_dark_mode, save_tasks, Snapshot};
pub use store::{FileStore, KeyValueStore};
