//! HTML fragment rendering for both widgets.
//!
//! The checkbox inputs carry the category attribute themselves, so the
//! rendered fragments satisfy the same markup contract that discovery
//! scans for.

use consentry_core::{CategorySet, ConsentRecord, WidgetConfig};
use consentry_dom::CATEGORY_ATTR;

/// Minimal escaping for text content and attribute values.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn necessary_section() -> String {
    concat!(
        "<div><label><input type=\"checkbox\" checked disabled> Strictly necessary cookies</label>",
        "<p><small>Strictly necessary cookies enable basic functions such as login for registered ",
        "users. The website cannot work properly without them.</small></p></div>\n"
    )
    .to_string()
}

fn category_section(category: &str, checked: bool) -> String {
    format!(
        "<div><label><input type=\"checkbox\" {attr}=\"{cat}\"{checked}> {label}</label></div>\n",
        attr = CATEGORY_ATTR,
        cat = escape(category),
        checked = if checked { " checked" } else { "" },
        label = escape(&label(category)),
    )
}

fn sections(categories: &CategorySet, working: &ConsentRecord) -> String {
    let mut out = necessary_section();
    for category in categories.iter() {
        out.push_str(&category_section(category, working.is_granted(category)));
    }
    out
}

fn footer_links(config: &WidgetConfig) -> String {
    let mut links = Vec::new();
    if let Some(url) = &config.privacy_policy_url {
        links.push(format!(
            "<a href=\"{}\">Privacy policy</a>",
            escape(url)
        ));
    }
    if let Some(url) = &config.imprint_url {
        links.push(format!("<a href=\"{}\">Imprint</a>", escape(url)));
    }
    if links.is_empty() {
        String::new()
    } else {
        format!("<p><small>{}</small></p>\n", links.join(" "))
    }
}

/// The modal banner fragment. The inner container carries
/// `tabindex="-1"` so the host can move focus into the modal when it
/// becomes visible.
pub fn banner(
    categories: &CategorySet,
    working: &ConsentRecord,
    config: &WidgetConfig,
    visible: bool,
) -> String {
    let mut out = format!(
        "<div class=\"cookie-banner{}\">\n<div class=\"inner\" tabindex=\"-1\">\n",
        if visible { " is-visible" } else { "" }
    );
    out.push_str("<h2>This website uses cookies</h2>\n");
    out.push_str("<p>This website uses cookies for basic functions and, with your consent, for third-party services.");
    if let Some(url) = &config.privacy_policy_url {
        out.push_str(&format!(
            " See our <a href=\"{}\">privacy policy</a> for details.",
            escape(url)
        ));
    }
    out.push_str("</p>\n");
    out.push_str(&sections(categories, working));
    out.push_str("<p><button type=\"button\" data-action=\"save\">Save &amp; close</button></p>\n");
    out.push_str(&footer_links(config));
    out.push_str("</div>\n</div>\n");
    out
}

/// The inline preferences fragment.
pub fn preferences(
    categories: &CategorySet,
    working: &ConsentRecord,
    config: &WidgetConfig,
    saved: bool,
) -> String {
    let mut out = String::from("<div class=\"cookie-preferences\">\n");
    out.push_str(&sections(categories, working));
    out.push_str(
        "<p><button type=\"button\" data-action=\"save\">Update preferences</button></p>\n",
    );
    out.push_str(&footer_links(config));
    out.push_str(&format!(
        "<div class=\"success{}\">&check; We have updated your preferences!</div>\n",
        if saved { "" } else { " is-hidden" }
    ));
    out.push_str("</div>\n");
    out
}
