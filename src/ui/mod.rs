//! Terminal presentation for annotated trees
//!
//! Everything here is a pure function from data plus capability flags to a
//! `String`; nothing touches the terminal except the capability probe.
//!
//! # Module Structure
//!
//! - `theme` - Design tokens (semantic colors, unicode/ascii icon sets)
//! - `text` - Semantic-colored text spans
//! - `terminal` - Capability detection (tty, color, unicode)
//! - `tree` - Annotated row and summary rendering

mod terminal;
mod text;
mod theme;
mod tree;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use text::ColoredText;
pub use theme::{colors, icons, icons_ascii};
pub use tree::{render_annotated_node, render_summary};
