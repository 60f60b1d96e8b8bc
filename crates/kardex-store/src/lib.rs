//! kardex-store
//!
//! In-memory record collections with best-effort persistence. The store is
//! the authoritative source for the session; persistence mirrors it after
//! every committed change and is reloaded once at startup. Persistence
//! failures never propagate — a failed read seeds an empty collection, a
//! failed write is logged and forgotten.

pub mod persist;
pub mod store;

pub use persist::{CollectionKey, FileStore, MemoryStore, Persistence};
pub use store::{RecordStore, StoredRecord};
