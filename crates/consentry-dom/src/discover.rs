//! Category discovery — a pure function of the current snapshot.

use consentry_core::CategorySet;

use crate::snapshot::DocumentSnapshot;

/// Distinct consent categories declared anywhere on the page, from
/// scripts and tagged elements alike.
///
/// No caching: each widget discovers independently at construction so
/// the result always reflects the live page. Two widgets on one page
/// compute the set twice; that redundancy is accepted.
pub fn discover(doc: &DocumentSnapshot) -> CategorySet {
    doc.scripts()
        .iter()
        .map(|s| s.category.clone())
        .chain(doc.elements().iter().map(|e| e.category.clone()))
        .collect()
}
