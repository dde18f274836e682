//! First-run consent banner.

use consentry_activate::ScriptActivator;
use consentry_core::{CategorySet, ConsentRecord, WidgetConfig};
use consentry_dom::{discover, DocumentSnapshot};
use consentry_store::ConsentStore;
use tracing::{debug, info};

use crate::render;

/// Banner visibility state. `Hidden` is both the initial state and
/// where every save lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    Hidden,
    Visible,
}

/// Modal banner shown until a consent decision exists.
///
/// There is no dismiss-without-deciding path: the only way out of
/// `Visible` is [`BannerWidget::save`].
pub struct BannerWidget<S: ConsentStore> {
    store: S,
    config: WidgetConfig,
    state: BannerState,
    /// Transient working copy; the store owns the source of truth.
    working: ConsentRecord,
    categories: CategorySet,
    first_run: bool,
    activator: ScriptActivator,
}

impl<S: ConsentStore> BannerWidget<S> {
    /// Load the current record (absent becomes an empty working copy)
    /// and discover the page's categories.
    pub fn new(store: S, config: WidgetConfig, doc: &DocumentSnapshot) -> Self {
        let loaded = store.load();
        let first_run = loaded.is_none();
        let categories = discover(doc);
        debug!(
            "Banner constructed: first_run={}, {} categories",
            first_run,
            categories.len()
        );

        Self {
            store,
            config,
            state: BannerState::Hidden,
            working: loaded.unwrap_or_default(),
            categories,
            first_run,
            activator: ScriptActivator::new(),
        }
    }

    /// Called once the widget is attached to the page. A first-time
    /// visitor gets the modal; a returning visitor gets their past
    /// consent re-applied without prompting.
    pub fn attach(&mut self, doc: &mut DocumentSnapshot) {
        if self.first_run {
            self.state = BannerState::Visible;
            info!("No consent decision found; showing banner");
        } else {
            self.activator.activate(doc, &self.working);
        }
    }

    /// Record a checkbox toggle in the working copy only. Choices for
    /// the implicit necessary category are ignored.
    pub fn set_choice(&mut self, category: &str, granted: bool) {
        self.working.set(category, granted);
    }

    /// Merge every rendered checkbox state into the record, persist it
    /// wholesale, activate granted scripts and hide the banner.
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
        self.state = BannerState::Hidden;
        self.first_run = false;
        info!(
            "Consent saved from banner: {} of {} categories granted",
            self.working.granted().count(),
            self.working.len()
        );
    }

    pub fn state(&self) -> BannerState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == BannerState::Visible
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn record(&self) -> &ConsentRecord {
        &self.working
    }

    /// The embeddable banner fragment for the current state.
    pub fn render(&self) -> String {
        render::banner(
            &self.categories,
            &self.working,
            &self.config,
            self.is_visible(),
        )
    }
}
