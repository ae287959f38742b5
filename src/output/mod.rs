//! Colorized line rendering
//!
//! - `theme` - the immutable color configuration injected into the renderer
//! - `render` - formatting of one item into an aligned, colorized line

pub mod render;
mod theme;

pub use render::{INDENT_MARKER, SEPARATOR, description_column, write_item};
pub use theme::Theme;
