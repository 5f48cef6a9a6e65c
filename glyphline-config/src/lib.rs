//! Configuration for the glyphline text pipeline.
//!
//! This crate provides:
//!
//! - [`ThemeConfig`]: the font theme (primary faces per style category, the
//!   built-in default faces behind them, and an optional emoji face)
//! - [`LayoutConfig`]: tab expansion and missing-glyph substitution settings
//! - YAML loading and saving with XDG-style default paths
//! - Default value functions used by `#[serde(default = ...)]`

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::ThemeConfig;
pub use error::ConfigError;
pub use types::{FontCategory, FontSlots, FontSource, LayoutConfig, SubstituteBaseline};
