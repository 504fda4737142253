// ABOUTME: Session collection management module
// Provides the SessionStore plus the key-value persistence seam beneath it

pub mod persistence;
pub mod store;

pub use persistence::{FileStorage, MemoryStorage, Storage, StorageError, SESSIONS_KEY};
pub use store::{SessionStore, StoreError, TabRemoval};
