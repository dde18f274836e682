//! Consentry Store — the consent persistence port and its backends.
//!
//! One record under one well-known key, written wholesale. Known
//! limitation: concurrent tabs/processes sharing the same backing
//! storage are not coordinated — a save in one is not observed by
//! another's in-memory copy.

pub mod file;
pub mod memory;
pub mod port;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use port::{ConsentStore, CONSENT_KEY};
