//! Badge placement at a rounded corner.
//!
//! A badge is anchored on the 45° bisector of one corner of its parent. For a
//! square parent the boundary point on that bisector is the corner itself; as
//! the corner rounds toward a full circle the point retreats inward along the
//! diagonal by `r × (1 − sin 45°)`. The badge is then pushed back outward by a
//! fraction of its own height so its edge, not its center, meets the boundary:
//! a quarter of the height for a square parent, half for a circle.

use std::cell::Cell;
use std::f32::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use crate::coords::{PixelRatio, Rect, Vec2};

use super::shape::clamp;

// ── Corner ────────────────────────────────────────────────────────────────

/// Edge a vertical inset is measured from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Edge a horizontal inset is measured from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Corner of the parent a badge is anchored to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

const CORNER_EDGES: [(VerticalEdge, HorizontalEdge); 4] = [
    (VerticalEdge::Top, HorizontalEdge::Left),
    (VerticalEdge::Top, HorizontalEdge::Right),
    (VerticalEdge::Bottom, HorizontalEdge::Left),
    (VerticalEdge::Bottom, HorizontalEdge::Right),
];

impl Corner {
    pub const ALL: [Corner; 4] =
        [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// The two edges this corner's inset is applied to.
    #[inline]
    pub const fn edges(self) -> (VerticalEdge, HorizontalEdge) {
        CORNER_EDGES[self as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `Corner::from_str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerParseError(pub String);

impl fmt::Display for CornerParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown corner {:?}: expected top-left, top-right, bottom-left or bottom-right",
            self.0
        )
    }
}

impl std::error::Error for CornerParseError {}

impl FromStr for Corner {
    type Err = CornerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corner::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CornerParseError(s.to_string()))
    }
}

// ── offset math ───────────────────────────────────────────────────────────

/// Distance along each axis from the bounding-box corner to the point where
/// the 45° bisector meets a corner of radius `parent_radius`.
#[inline]
pub fn edge_offset(parent_radius: f32) -> f32 {
    parent_radius * (1.0 - FRAC_1_SQRT_2)
}

/// How far the badge is pushed outward from the boundary point.
///
/// Ranges from `badge_size / 4` (square parent) to `badge_size / 2`
/// (circular parent, `parent_radius == parent_size / 2`).
#[inline]
pub fn self_offset(parent_size: f32, parent_radius: f32, badge_size: f32) -> f32 {
    let roundness = if parent_size.is_finite() && parent_size > 0.0 {
        parent_radius / (parent_size * 2.0)
    } else {
        0.0
    };
    clamp(badge_size * (0.25 + roundness), badge_size / 4.0, badge_size / 2.0)
}

/// Inset from the chosen corner, applied identically on both axes.
///
/// Usually negative: the badge overhangs the parent's edge. Snapped to the
/// physical pixel grid of `pixels`. Returns `0.0` when `badge_size` is not a
/// positive finite number or when the snapped result would overflow; a
/// non-positive `parent_size` or a NaN / negative radius degrades to
/// square-corner placement.
///
/// The slope with respect to `parent_radius` is
/// `(1 - sin 45°) - badge_size / (2 * parent_size)`, so the direction depends
/// on the badge-to-parent ratio. For `badge_size <= 2 (1 - sin 45°) * parent_size`
/// (about `0.586 * parent_size`) the offset never decreases as the parent gets
/// rounder; for larger badges it never increases.
pub fn compute_badge_offset(
    parent_size: f32,
    parent_radius: f32,
    badge_size: f32,
    pixels: PixelRatio,
) -> f32 {
    if !badge_size.is_finite() || badge_size <= 0.0 {
        return 0.0;
    }

    let parent_valid = parent_size.is_finite() && parent_size > 0.0;
    let radius = if parent_valid && parent_radius.is_finite() { parent_radius.max(0.0) } else { 0.0 };

    let offset = edge_offset(radius) - self_offset(parent_size, radius, badge_size);
    let snapped = pixels.round_to_nearest_pixel(offset);
    if snapped.is_finite() { snapped } else { 0.0 }
}

// ── AnchorOffset ──────────────────────────────────────────────────────────

/// A resolved badge position: the inset and the corner it applies to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnchorOffset {
    pub corner: Corner,
    pub offset: f32,
}

impl AnchorOffset {
    /// Rect for a badge of `badge` size inside `parent`.
    ///
    /// Top / left insets are measured from the parent's origin, bottom / right
    /// insets from its far edge, so a negative offset always moves the badge
    /// outward.
    pub fn place(self, parent: Rect, badge: Vec2) -> Rect {
        let (vertical, horizontal) = self.corner.edges();
        let max = parent.max();

        let y = match vertical {
            VerticalEdge::Top => parent.origin.y + self.offset,
            VerticalEdge::Bottom => max.y - self.offset - badge.y,
        };
        let x = match horizontal {
            HorizontalEdge::Left => parent.origin.x + self.offset,
            HorizontalEdge::Right => max.x - self.offset - badge.x,
        };

        Rect::from_origin_size(Vec2::new(x, y), badge)
    }
}

// ── BadgeAnchor ───────────────────────────────────────────────────────────

/// Inputs of one badge placement.
///
/// `parent_radius` must already be resolved and clamped against
/// `parent_size` (see [`resolve_radius`](super::resolve_radius)).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BadgeAnchor {
    pub parent_size: f32,
    pub parent_radius: f32,
    /// Height of the badge's bounding box. Width does not affect placement.
    pub badge_size: f32,
    pub corner: Corner,
}

impl BadgeAnchor {
    /// Computes the placement, or `None` when the badge has no positive size
    /// and should not be positioned at all.
    pub fn resolve(self, pixels: PixelRatio) -> Option<AnchorOffset> {
        if !self.badge_size.is_finite() || self.badge_size <= 0.0 {
            return None;
        }
        let offset =
            compute_badge_offset(self.parent_size, self.parent_radius, self.badge_size, pixels);
        Some(AnchorOffset { corner: self.corner, offset })
    }

    /// Bitwise input equality, so NaN inputs still hit the cache.
    fn same_inputs(&self, other: &BadgeAnchor) -> bool {
        self.parent_size.to_bits() == other.parent_size.to_bits()
            && self.parent_radius.to_bits() == other.parent_radius.to_bits()
            && self.badge_size.to_bits() == other.badge_size.to_bits()
            && self.corner == other.corner
    }
}

// ── AnchorCache ───────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone)]
struct CacheEntry {
    anchor: BadgeAnchor,
    pixels: PixelRatio,
    result: Option<AnchorOffset>,
}

/// Single-entry memo for [`BadgeAnchor::resolve`].
///
/// Widgets hold one of these and query it from `paint(&self)`; the placement
/// is recomputed only when an input changes. Results are identical to calling
/// `resolve` directly.
#[derive(Debug, Default)]
pub struct AnchorCache {
    entry: Cell<Option<CacheEntry>>,
    misses: Cell<u32>,
}

impl AnchorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, anchor: BadgeAnchor, pixels: PixelRatio) -> Option<AnchorOffset> {
        if let Some(entry) = self.entry.get() {
            if entry.pixels == pixels && entry.anchor.same_inputs(&anchor) {
                return entry.result;
            }
        }

        let result = anchor.resolve(pixels);
        log::trace!(
            "badge anchor recomputed: parent={} radius={} badge={} corner={} -> {:?}",
            anchor.parent_size,
            anchor.parent_radius,
            anchor.badge_size,
            anchor.corner,
            result.map(|r| r.offset),
        );
        self.entry.set(Some(CacheEntry { anchor, pixels, result }));
        self.misses.set(self.misses.get().wrapping_add(1));
        result
    }

    /// Number of times the placement was actually computed.
    pub fn recomputations(&self) -> u32 {
        self.misses.get()
    }

    /// Forgets the memoized placement.
    pub fn invalidate(&self) {
        self.entry.set(None);
    }
}
