//! Configuration types shared by the theme config and the font pipeline.

mod font;
mod layout;

pub use font::{FontCategory, FontSlots, FontSource};
pub use layout::{LayoutConfig, SubstituteBaseline};
