//! Script activation.

use std::collections::HashSet;

use consentry_core::ConsentRecord;
use consentry_dom::{DocumentSnapshot, ScriptId, JAVASCRIPT_MIME};
use tracing::{debug, info};

/// Promotes deferred scripts whose category the record grants.
///
/// Promotion mutates the script in place (executable type, deferred
/// source copied into the active source) and then reinserts it, which
/// is what actually triggers execution. Activation only ever adds:
/// denied or absent categories are left untouched and no script is
/// ever reverted — revoking consent mid-page gates future activation,
/// it does not stop a running script.
///
/// Each script is activated at most once per page life; repeated saves
/// with the same granted category do not re-run it.
#[derive(Debug, Default)]
pub struct ScriptActivator {
    activated: HashSet<ScriptId>,
}

impl ScriptActivator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Promote every not-yet-activated script tagged with a granted
    /// category. Granted categories with no matching scripts are
    /// silently skipped.
    pub fn activate(&mut self, doc: &mut DocumentSnapshot, record: &ConsentRecord) {
        let mut total = 0;

        for category in record.granted() {
            let mut count = 0;
            for id in doc.scripts_tagged(category) {
                if self.activated.contains(&id) {
                    continue;
                }
                self.promote(doc, id);
                self.activated.insert(id);
                count += 1;
            }
            if count > 0 {
                debug!("Activated {} script(s) for category '{}'", count, category);
                total += count;
            }
        }

        if total > 0 {
            info!("Script activation: {} script(s) promoted", total);
        }
    }

    /// Number of scripts activated so far in this page life.
    pub fn activated_count(&self) -> usize {
        self.activated.len()
    }

    /// Whether a specific script has already been activated.
    pub fn is_activated(&self, id: ScriptId) -> bool {
        self.activated.contains(&id)
    }

    fn promote(&self, doc: &mut DocumentSnapshot, id: ScriptId) {
        if let Some(script) = doc.script_mut(id) {
            script.mime_type = JAVASCRIPT_MIME.to_string();
            if script.src.is_none() {
                if let Some(deferred) = script.deferred_src.clone() {
                    script.src = Some(deferred);
                }
            }
        }
        doc.reinsert(id);
    }
}
