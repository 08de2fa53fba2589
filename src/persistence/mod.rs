pub mod cell;
pub mod files;
pub mod kv;

pub use cell::PersistentCell;
pub use files::{ensure_data_dir, init_local_data_dir, log_file};
pub use kv::{shared, FileStore, MemoryStore, SharedStore};
