//! Lift consent-relevant markup out of an HTML document.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::snapshot::{
    DocumentSnapshot, ScriptNode, CATEGORY_ATTR, DEFERRED_SRC_ATTR, JAVASCRIPT_MIME,
};

// Compiled once, reused.
static TAGGED_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("[data-cookie]").unwrap());

impl DocumentSnapshot {
    /// Parse an HTML document and lift every element carrying the
    /// category attribute into a snapshot. Scripts keep their authored
    /// type, source attributes and inline body; any other element only
    /// contributes its category to discovery.
    ///
    /// Elements with an empty category attribute are dropped — there is
    /// nothing to grant or deny for them.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut snapshot = Self::new();

        for el in document.select(&TAGGED_SEL) {
            let Some(category) = el.value().attr(CATEGORY_ATTR).filter(|c| !c.is_empty()) else {
                continue;
            };

            if el.value().name() == "script" {
                // A script element with no type attribute is executable.
                let mut script = ScriptNode::deferred(category);
                script.mime_type = el
                    .value()
                    .attr("type")
                    .unwrap_or(JAVASCRIPT_MIME)
                    .to_string();
                script.src = el.value().attr("src").map(str::to_string);
                script.deferred_src = el.value().attr(DEFERRED_SRC_ATTR).map(str::to_string);
                let body: String = el.text().collect();
                if !body.trim().is_empty() {
                    script.inline = Some(body);
                }
                snapshot.push_script(script);
            } else {
                snapshot.add_tagged_element(el.value().name(), category);
            }
        }

        debug!(
            "Parsed snapshot: {} scripts, {} tagged elements",
            snapshot.scripts().len(),
            snapshot.elements().len()
        );
        snapshot
    }
}
