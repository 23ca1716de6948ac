//! Shape metrics and badge anchoring.
//!
//! Everything here is a pure function of its inputs: no allocation, no I/O,
//! no panics on malformed values. Degenerate inputs collapse to a square
//! corner or a zero offset so a render pass can never fail because of them.

pub mod anchor;
pub mod shape;

pub use anchor::{
    compute_badge_offset, AnchorCache, AnchorOffset, BadgeAnchor, Corner, CornerParseError,
    HorizontalEdge, VerticalEdge,
};
pub use shape::{clamp, resolve_radius, resolve_radius_str, Dimension, DimensionParseError};
