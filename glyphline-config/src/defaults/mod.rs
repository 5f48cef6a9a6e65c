//! Default value functions for configuration.
//!
//! Each sub-module groups related free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes. Everything is
//! re-exported here so call sites only need `crate::defaults::*`.

mod font;
mod layout;

// ── Fonts ──────────────────────────────────────────────────────────────────
pub use font::{builtin_default_fonts, emoji_font, fonts};

// ── Layout ─────────────────────────────────────────────────────────────────
pub use layout::{default_tab_width, tab_space_fallback};
