//! Always-visible preferences panel for changing past consent.

use consentry_activate::ScriptActivator;
use consentry_core::{CategorySet, ConsentRecord, WidgetConfig};
use consentry_dom::{discover, DocumentSnapshot};
use consentry_store::ConsentStore;
use tracing::info;

use crate::render;

/// Inline settings panel, rendered wherever it is embedded (typically
/// a privacy settings page). Unlike the banner it has no show/hide
/// state.
pub struct PreferencesWidget<S: ConsentStore> {
    store: S,
    config: WidgetConfig,
    working: ConsentRecord,
    categories: CategorySet,
    /// Acknowledgment shown after a save. Resets only when the widget
    /// is reconstructed (page navigation/reload) — there is no
    /// auto-dismiss timer.
    saved: bool,
    activator: ScriptActivator,
}

impl<S: ConsentStore> PreferencesWidget<S> {
    pub fn new(store: S, config: WidgetConfig, doc: &DocumentSnapshot) -> Self {
        let working = store.load().unwrap_or_default();
        let categories = discover(doc);

        Self {
            store,
            config,
            working,
            categories,
            saved: false,
            activator: ScriptActivator::new(),
        }
    }

    /// Record a checkbox toggle in the working copy only.
    pub fn set_choice(&mut self, category: &str, granted: bool) {
        self.working.set(category, granted);
    }

    /// Same merge → persist → activate sequence as the banner, then
    /// show the acknowledgment. Revoking a category never stops a
    /// script that already ran; it only gates future activation.
    pub fn save(&mut self, doc: &mut DocumentSnapshot) {
        let choices: Vec<(String, bool)> = self
            .categories
            .iter()
            .map(|c| (c.to_string(), self.working.is_granted(c)))
            .collect();
        for (category, granted) in choices {
            self.working.set(category, granted);
        }

        self.store.save(&self.working);
        self.activator.activate(doc, &self.working);
        self.saved = true;
        info!(
            "Consent updated from preferences: {} of {} categories granted",
            self.working.granted().count(),
            self.working.len()
        );
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn record(&self) -> &ConsentRecord {
        &self.working
    }

    /// The embeddable preferences fragment for the current state.
    pub fn render(&self) -> String {
        render::preferences(&self.categories, &self.working, &self.config, self.saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consentry_store::MemoryStore;

    fn page() -> DocumentSnapshot {
        let mut doc = DocumentSnapshot::new();
        doc.add_deferred_script("statistics", "https://stats.example/t.js");
        doc.add_deferred_script("marketing", "https://ads.example/t.js");
        doc
    }

    #[test]
    fn test_loads_existing_record() {
        let store = MemoryStore::new();
        store.seed_raw(r#"{"statistics":true}"#);

        let doc = page();
        let prefs = PreferencesWidget::new(store, WidgetConfig::new(), &doc);
        assert!(prefs.record().is_granted("statistics"));
        assert!(!prefs.saved());
    }

    #[test]
    fn test_save_sets_acknowledgment() {
        let mut doc = page();
        let mut prefs = PreferencesWidget::new(MemoryStore::new(), WidgetConfig::new(), &doc);

        prefs.set_choice("statistics", true);
        prefs.save(&mut doc);

        assert!(prefs.saved());
        assert!(prefs.render().contains("class=\"success\""));
    }

    #[test]
    fn test_revocation_persists_but_does_not_stop_scripts() {
        let store = MemoryStore::new();
        store.seed_raw(r#"{"statistics":true,"marketing":false}"#);

        let mut doc = page();
        let mut prefs = PreferencesWidget::new(store, WidgetConfig::new(), &doc);

        // Apply the prior grant, as a banner on the same page would.
        let prior = prefs.working.clone();
        prefs.activator.activate(&mut doc, &prior);
        let stats = doc.scripts_tagged("statistics")[0];
        assert_eq!(doc.script(stats).unwrap().executions, 1);

        prefs.set_choice("statistics", false);
        prefs.save(&mut doc);

        let stored = prefs.store.load().unwrap();
        assert!(!stored.is_granted("statistics"));
        // The already-running script is not reverted.
        let script = doc.script(stats).unwrap();
        assert!(script.is_executable());
        assert_eq!(script.executions, 1);
    }

    #[test]
    fn test_granting_from_preferences_activates() {
        let store = MemoryStore::new();
        store.save(&ConsentRecord::new());

        let mut doc = page();
        let mut prefs = PreferencesWidget::new(store, WidgetConfig::new(), &doc);
        prefs.set_choice("marketing", true);
        prefs.save(&mut doc);

        let ads = doc.scripts_tagged("marketing")[0];
        assert_eq!(doc.script(ads).unwrap().executions, 1);
    }
}
