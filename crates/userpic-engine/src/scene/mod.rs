//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey, ZIndex};
pub use shapes::circle::CircleCmd;
pub use shapes::image::{ImageCmd, ImageSource};
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
