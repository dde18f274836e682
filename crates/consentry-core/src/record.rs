//! Consent record and category set — the shared consent-state model.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The implicit always-granted category. Rendered as a fixed section in
/// both widgets, never part of a persisted record.
pub const NECESSARY: &str = "necessary";

/// Per-category consent choices, persisted as a plain JSON object
/// mapping category name to granted/denied.
///
/// Category names are arbitrary identifiers declared by page content,
/// not a fixed enum. An *empty* record means a decision was made and
/// zero optional categories were granted; the absence of any record is
/// a different state ("no decision yet") and is represented by the
/// persistence port returning `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentRecord(BTreeMap<String, bool>);

impl ConsentRecord {
    /// Empty record: decision made, nothing granted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a category is granted. `"necessary"` is implicit and
    /// always granted.
    pub fn is_granted(&self, category: &str) -> bool {
        if category == NECESSARY {
            return true;
        }
        self.0.get(category).copied().unwrap_or(false)
    }

    /// Record a choice for a category. Attempts to store a choice for
    /// `"necessary"` are ignored — it is never part of the record.
    pub fn set(&mut self, category: impl Into<String>, granted: bool) {
        let category = category.into();
        if category == NECESSARY {
            return;
        }
        self.0.insert(category, granted);
    }

    /// Categories the record holds an explicit choice for.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Granted categories only (excluding the implicit one).
    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop the implicit category if a stored blob carried it. Applied
    /// by persistence backends after deserializing.
    pub fn normalize(&mut self) {
        self.0.remove(NECESSARY);
    }
}

/// Distinct consent categories discovered from page markup. Recomputed
/// on each widget construction, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(BTreeSet<String>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category. The implicit `"necessary"` category is not
    /// discovered from markup and is rejected here.
    pub fn insert(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != NECESSARY && !category.is_empty() {
            self.0.insert(category);
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<String> for CategorySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}
