//! Shared launcher-widget domain model for the Voicelet surfaces.
//!
//! This crate owns everything both front ends need to agree on about the
//! embeddable voice launcher: the corner [`Position`] model, the
//! [`WidgetConfig`] wire shape sent to the backend, the pure preview
//! render plan consumed by the dashboard preview pane and the extension
//! content script, and the example embed snippet used by the extension
//! popup mockup.

pub mod config;
pub mod embed;
pub mod preview;

pub use config::{DEFAULT_COLOR, DEFAULT_CTA_TEXT, Position, WidgetConfig};
pub use preview::PreviewPlan;
