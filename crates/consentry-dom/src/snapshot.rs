//! Plain-data snapshot of the consent-relevant parts of a page.

use uuid::Uuid;

/// Attribute that tags an element with a consent category.
pub const CATEGORY_ATTR: &str = "data-cookie";
/// Attribute holding the real script URL until the category is granted.
pub const DEFERRED_SRC_ATTR: &str = "data-src";
/// Script type that the page's engine executes.
pub const JAVASCRIPT_MIME: &str = "text/javascript";
/// Placeholder type used by deferred scripts in markup.
pub const PLACEHOLDER_MIME: &str = "text/plain";

/// Stable identity of a script node within one page life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptId(Uuid);

impl ScriptId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// A script element tagged with a consent category.
///
/// A deferred script is authored with a non-executable placeholder type
/// and its real URL in [`DEFERRED_SRC_ATTR`]; promotion mutates it in
/// place. `executions` counts how many times the node was inserted into
/// the document while executable with something to run — insertion, not
/// attribute mutation, is what makes a script element run in-page.
#[derive(Debug, Clone)]
pub struct ScriptNode {
    pub id: ScriptId,
    pub category: String,
    pub mime_type: String,
    pub src: Option<String>,
    pub deferred_src: Option<String>,
    pub inline: Option<String>,
    pub executions: u32,
}

impl ScriptNode {
    /// A deferred script as the markup contract authors it.
    pub fn deferred(category: impl Into<String>) -> Self {
        Self {
            id: ScriptId::new(),
            category: category.into(),
            mime_type: PLACEHOLDER_MIME.to_string(),
            src: None,
            deferred_src: None,
            inline: None,
            executions: 0,
        }
    }

    pub fn with_deferred_src(mut self, url: impl Into<String>) -> Self {
        self.deferred_src = Some(url.into());
        self
    }

    pub fn with_inline(mut self, body: impl Into<String>) -> Self {
        self.inline = Some(body.into());
        self
    }

    pub fn is_executable(&self) -> bool {
        self.mime_type == JAVASCRIPT_MIME
    }

    /// Whether insertion would actually run anything.
    pub fn has_payload(&self) -> bool {
        self.src.is_some() || self.inline.is_some()
    }
}

/// A non-script element carrying the category attribute (for example a
/// consent checkbox). Participates in category discovery only.
#[derive(Debug, Clone)]
pub struct TaggedElement {
    pub tag: String,
    pub category: String,
}

/// Ordered scripts plus tagged elements lifted from a page.
///
/// Mutation primitives (`script_mut`, `reinsert`) exist for the
/// activator seam; nothing else should touch script nodes directly.
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    scripts: Vec<ScriptNode>,
    elements: Vec<TaggedElement>,
}

impl DocumentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a script node, returning its identity.
    pub fn push_script(&mut self, script: ScriptNode) -> ScriptId {
        let id = script.id;
        self.scripts.push(script);
        id
    }

    /// Convenience for the common deferred-external-script shape.
    pub fn add_deferred_script(
        &mut self,
        category: impl Into<String>,
        deferred_src: impl Into<String>,
    ) -> ScriptId {
        self.push_script(ScriptNode::deferred(category).with_deferred_src(deferred_src))
    }

    pub fn add_tagged_element(&mut self, tag: impl Into<String>, category: impl Into<String>) {
        self.elements.push(TaggedElement {
            tag: tag.into(),
            category: category.into(),
        });
    }

    pub fn scripts(&self) -> &[ScriptNode] {
        &self.scripts
    }

    pub fn elements(&self) -> &[TaggedElement] {
        &self.elements
    }

    pub fn script(&self, id: ScriptId) -> Option<&ScriptNode> {
        self.scripts.iter().find(|s| s.id == id)
    }

    pub fn script_mut(&mut self, id: ScriptId) -> Option<&mut ScriptNode> {
        self.scripts.iter_mut().find(|s| s.id == id)
    }

    /// Identities of every script tagged with a category.
    pub fn scripts_tagged(&self, category: &str) -> Vec<ScriptId> {
        self.scripts
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.id)
            .collect()
    }

    /// Remove the script from its position and append it again — the
    /// execution trigger. Returns false if the id is unknown.
    pub fn reinsert(&mut self, id: ScriptId) -> bool {
        let Some(pos) = self.scripts.iter().position(|s| s.id == id) else {
            return false;
        };
        let mut script = self.scripts.remove(pos);
        if script.is_executable() && script.has_payload() {
            script.executions += 1;
        }
        self.scripts.push(script);
        true
    }
}
