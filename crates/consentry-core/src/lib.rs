//! Consentry Core — consent record model, widget configuration, errors.

pub mod config;
pub mod error;
pub mod record;

pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use record::{CategorySet, ConsentRecord, NECESSARY};
