//! The injected persistence port.

use consentry_core::ConsentRecord;

/// Well-known storage key for the persisted consent record.
pub const CONSENT_KEY: &str = "cookie-consent";

/// Read/write access to the single persisted consent record.
///
/// Widgets hold a transient in-memory copy loaded at construction and
/// write it back wholesale on save; there is no partial update.
pub trait ConsentStore {
    /// The persisted record, or `None` when no decision has been made
    /// yet. A malformed blob (not JSON, wrong shape, non-boolean
    /// values) also yields `None` — parse failures are never surfaced.
    ///
    /// `None` is distinct from `Some(empty)`: the latter means a
    /// decision was made and zero optional categories were granted.
    fn load(&self) -> Option<ConsentRecord>;

    /// Serialize and write the full record, replacing any prior value.
    /// Failures degrade to "no consent stored" and are only logged.
    fn save(&self, record: &ConsentRecord);
}

// Both widgets on one page share the same underlying storage.
impl<T: ConsentStore + ?Sized> ConsentStore for &T {
    fn load(&self) -> Option<ConsentRecord> {
        (**self).load()
    }

    fn save(&self, record: &ConsentRecord) {
        (**self).save(record)
    }
}

/// Decode a stored blob, treating any deviation from the expected
/// category → boolean object as an absent record.
pub(crate) fn decode(raw: &str) -> Option<ConsentRecord> {
    let mut record: ConsentRecord = serde_json::from_str(raw).ok()?;
    record.normalize();
    Some(record)
}
