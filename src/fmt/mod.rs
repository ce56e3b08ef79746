//! Rendering is split by concern: argument values, printf substitution, timestamp
//! layouts, colors, and the final line assembly.

mod arg;
mod color;
pub mod layout;
pub mod printf;
pub mod render;

pub use arg::{Arg, join};
pub use color::{Color, colorize, strip_ansi};
pub use printf::sprintf;
pub use render::{render, render_plain};
