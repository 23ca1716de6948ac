//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Physical pixels only appear through [`PixelRatio`], which snaps logical
//! values onto the device grid.

mod corner_radii;
mod pixel_ratio;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use pixel_ratio::PixelRatio;
pub use rect::Rect;
pub use vec2::Vec2;
