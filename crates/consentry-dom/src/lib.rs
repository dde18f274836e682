//! Consentry DOM — document snapshot model, HTML parsing, category
//! discovery.
//!
//! The snapshot decouples the consent engine from a live browser
//! document: page markup is parsed once into plain data, discovery is
//! a pure function over it, and the activator mutates it through a
//! small set of primitives. The execution counter on each script node
//! stands in for the page's script engine.

pub mod discover;
pub mod parse;
pub mod snapshot;

pub use discover::discover;
pub use snapshot::{
    DocumentSnapshot, ScriptId, ScriptNode, TaggedElement, CATEGORY_ATTR, DEFERRED_SRC_ATTR,
    JAVASCRIPT_MIME, PLACEHOLDER_MIME,
};
