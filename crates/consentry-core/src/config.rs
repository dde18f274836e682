//! Widget configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Optional configuration shared by both widgets.
///
/// When a link is present the rendered fragment includes it; when
/// absent the link is simply omitted — there is no error path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Link target for the privacy policy, rendered in the banner
    /// intro and footer when set.
    #[serde(skip_serializing_if = "Option::is_none", rename = "privacyPolicyUrl")]
    pub privacy_policy_url: Option<String>,
    /// Link target for the imprint page, rendered in the banner footer
    /// when set.
    #[serde(skip_serializing_if = "Option::is_none", rename = "imprintUrl")]
    pub imprint_url: Option<String>,
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_privacy_policy_url(mut self, url: impl Into<String>) -> Self {
        self.privacy_policy_url = Some(url.into());
        self
    }

    pub fn with_imprint_url(mut self, url: impl Into<String>) -> Self {
        self.imprint_url = Some(url.into());
        self
    }

    /// Parse a configuration the host passes as a JSON blob (for
    /// example from an embed attribute).
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
