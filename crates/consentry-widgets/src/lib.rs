//! Consentry Widgets — the first-run banner and the always-visible
//! preferences panel.
//!
//! Both widgets share the same flow: load the record through the
//! injected store, discover categories from the snapshot, collect
//! choices into a transient working copy, and on save write the copy
//! back wholesale and run the activator.

pub mod banner;
pub mod preferences;
pub mod render;

pub use banner::{BannerState, BannerWidget};
pub use preferences::PreferencesWidget;
