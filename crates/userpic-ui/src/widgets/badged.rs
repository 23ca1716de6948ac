use userpic_engine::coords::{Rect, Vec2};
use userpic_engine::geometry::{resolve_radius, AnchorCache, Corner, Dimension};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};
use crate::widgets::badge::Badge;

/// Anchors a [`Badge`] on any child shape.
///
/// The child is laid out normally; `parent_radius` describes how rounded it
/// is, resolved against the shorter side of the child's rect. Use this for
/// icons, buttons or tiles; [`Userpic`](super::userpic::Userpic) does the
/// same thing internally.
///
/// The placement math assumes a square parent. For a non-square child both
/// the radius and the parent size are taken from the shorter side, and the
/// inset is then applied from the child's actual edges, so on a wide tile the
/// badge still hugs the chosen corner.
///
/// # Example
/// ```rust,ignore
/// Badged::new(icon_tile, Badge::new(BadgeValue::Count(4)))
///     .parent_radius(Dimension::Px(12.0))
///     .corner(Corner::TopRight)
/// ```
pub struct Badged {
    child: Element,
    badge: Option<Badge>,
    parent_radius: Dimension,
    corner: Corner,
    anchor: AnchorCache,
}

impl Badged {
    pub fn new(child: impl Into<Element>, badge: impl Into<Option<Badge>>) -> Self {
        Self {
            child: child.into(),
            badge: badge.into(),
            parent_radius: Dimension::SQUARE,
            corner: Corner::TopRight,
            anchor: AnchorCache::new(),
        }
    }

    pub fn parent_radius(mut self, v: impl Into<Dimension>) -> Self { self.parent_radius = v.into(); self }
    pub fn corner(mut self, v: Corner) -> Self { self.corner = v; self }
}

impl Widget for Badged {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.child.measure(constraints, ctx)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.child.paint(painter, rect);

        let Some(badge) = &self.badge else {
            return;
        };
        let radius = resolve_radius(self.parent_radius, rect.min_side());
        let ctx = painter.layout_ctx();
        if let Some(badge_rect) = badge.anchored_rect(rect, radius, self.corner, &self.anchor, &ctx) {
            badge.paint(painter, badge_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        self.child.on_event(event, rect, ctx)
    }
}
