//! End-to-end consent flows — a parsed page snapshot, the in-memory
//! store standing in for browser storage, and both widgets driving the
//! activator.

use consentry_core::{ConsentRecord, WidgetConfig};
use consentry_dom::DocumentSnapshot;
use consentry_store::{ConsentStore, MemoryStore};
use consentry_widgets::{BannerWidget, PreferencesWidget};

const PAGE: &str = r#"
    <html>
      <head>
        <script type="text/plain" data-cookie="statistics"
                data-src="https://stats.example/tracker.js"></script>
        <script type="text/plain" data-cookie="marketing"
                data-src="https://ads.example/pixel.js"></script>
        <script type="text/plain" data-cookie="marketing">window.ads = true;</script>
      </head>
      <body></body>
    </html>
"#;

fn executions(doc: &DocumentSnapshot, category: &str) -> Vec<u32> {
    doc.scripts_tagged(category)
        .into_iter()
        .map(|id| doc.script(id).unwrap().executions)
        .collect()
}

/// Record absent, page declares {statistics, marketing}: the banner is
/// visible on attach, both optional sections render, the necessary
/// section is fixed-checked and disabled.
#[test]
fn test_first_visit_shows_banner_with_all_sections() {
    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(MemoryStore::new(), WidgetConfig::new(), &doc);
    banner.attach(&mut doc);

    assert!(banner.is_visible());
    let html = banner.render();
    assert!(html.contains("is-visible"));
    assert!(html.contains("checked disabled"));
    assert!(html.contains("data-cookie=\"statistics\""));
    assert!(html.contains("data-cookie=\"marketing\""));

    // No script runs before a decision.
    assert_eq!(executions(&doc, "statistics"), vec![0]);
    assert_eq!(executions(&doc, "marketing"), vec![0, 0]);
}

/// Stored record `{"statistics": true}`: the banner stays hidden,
/// statistics scripts run, marketing scripts stay inert.
#[test]
fn test_returning_visitor_reapplies_consent_silently() {
    let store = MemoryStore::new();
    store.seed_raw(r#"{"statistics":true}"#);

    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(store, WidgetConfig::new(), &doc);
    banner.attach(&mut doc);

    assert!(!banner.is_visible());
    assert_eq!(executions(&doc, "statistics"), vec![1]);
    assert_eq!(executions(&doc, "marketing"), vec![0, 0]);

    let promoted = doc.scripts_tagged("statistics")[0];
    assert_eq!(
        doc.script(promoted).unwrap().src.as_deref(),
        Some("https://stats.example/tracker.js")
    );
}

/// Saving with zero grants persists an all-false record; on the next
/// load the banner no longer shows and nothing runs.
#[test]
fn test_all_false_decision_suppresses_banner_on_reload() {
    let store = MemoryStore::new();

    {
        let mut doc = DocumentSnapshot::parse(PAGE);
        let mut banner = BannerWidget::new(&store, WidgetConfig::new(), &doc);
        banner.attach(&mut doc);
        banner.save(&mut doc);
    }

    let stored = store.load().expect("a decision was persisted");
    assert!(!stored.is_granted("statistics"));
    assert!(!stored.is_granted("marketing"));

    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(&store, WidgetConfig::new(), &doc);
    banner.attach(&mut doc);
    assert!(!banner.is_visible());
    assert_eq!(executions(&doc, "statistics"), vec![0]);
}

/// Granting in the banner runs every script tagged with the category,
/// and repeated saves within one page life do not re-run them.
#[test]
fn test_banner_grant_activates_once_per_page_life() {
    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(MemoryStore::new(), WidgetConfig::new(), &doc);
    banner.attach(&mut doc);

    banner.set_choice("marketing", true);
    banner.save(&mut doc);
    banner.save(&mut doc);

    assert_eq!(executions(&doc, "marketing"), vec![1, 1]);
    assert_eq!(executions(&doc, "statistics"), vec![0]);
}

/// Revoking a previously granted category from the preferences panel
/// persists the denial and shows the acknowledgment, but the scripts
/// that already ran are not reverted.
#[test]
fn test_preferences_revocation_is_not_retroactive() {
    let store = MemoryStore::new();
    store.seed_raw(r#"{"statistics":true,"marketing":false}"#);

    // A banner earlier in this page life applied the stored consent.
    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(&store, WidgetConfig::new(), &doc);
    banner.attach(&mut doc);
    assert_eq!(executions(&doc, "statistics"), vec![1]);

    let mut prefs = PreferencesWidget::new(&store, WidgetConfig::new(), &doc);
    prefs.set_choice("statistics", false);
    prefs.save(&mut doc);

    assert!(prefs.saved());
    assert!(prefs.render().contains("class=\"success\""));
    assert!(!store.load().unwrap().is_granted("statistics"));

    let script = doc.scripts_tagged("statistics")[0];
    assert!(doc.script(script).unwrap().is_executable());
    assert_eq!(doc.script(script).unwrap().executions, 1);
}

/// A stored grant for a category with no matching page elements is
/// harmless and never renders a section.
#[test]
fn test_undeclared_category_never_renders_or_activates() {
    let store = MemoryStore::new();
    store.seed_raw(r#"{"comfort":true,"statistics":true}"#);

    let mut doc = DocumentSnapshot::parse(PAGE);
    let mut banner = BannerWidget::new(&store, WidgetConfig::new(), &doc);
    banner.attach(&mut doc);

    assert!(!banner.render().contains("data-cookie=\"comfort\""));
    assert_eq!(executions(&doc, "statistics"), vec![1]);
}

/// Round trip through persistence is exact for arbitrary assignments.
#[test]
fn test_persistence_round_trip_is_exact() {
    let store = MemoryStore::new();
    for assignment in [
        vec![],
        vec![("statistics", true)],
        vec![("statistics", false), ("marketing", true)],
        vec![("statistics", true), ("marketing", true), ("comfort", false)],
    ] {
        let mut record = ConsentRecord::new();
        for (category, granted) in assignment {
            record.set(category, granted);
        }
        store.save(&record);
        assert_eq!(store.load().unwrap(), record);
    }
}
