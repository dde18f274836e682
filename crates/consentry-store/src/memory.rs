//! In-memory backend — the test substitute for real browser storage.

use consentry_core::ConsentRecord;
use parking_lot::Mutex;

use crate::port::{decode, ConsentStore};

/// Holds the serialized blob in memory so load/save still round-trips
/// through real JSON, the same as any persistent backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw blob directly, bypassing serialization. Lets tests
    /// stage malformed or hand-written stored state.
    pub fn seed_raw(&self, raw: impl Into<String>) {
        *self.slot.lock() = Some(raw.into());
    }

    /// The raw stored blob, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

impl ConsentStore for MemoryStore {
    fn load(&self) -> Option<ConsentRecord> {
        let slot = self.slot.lock();
        decode(slot.as_deref()?)
    }

    fn save(&self, record: &ConsentRecord) {
        match serde_json::to_string(record) {
            Ok(raw) => *self.slot.lock() = Some(raw),
            Err(e) => tracing::warn!("Failed to serialize consent record: {}", e),
        }
    }
}
