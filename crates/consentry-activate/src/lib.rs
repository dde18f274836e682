//! Consentry Activate — the single seam through which deferred scripts
//! become executable.

pub mod activator;

pub use activator::ScriptActivator;
