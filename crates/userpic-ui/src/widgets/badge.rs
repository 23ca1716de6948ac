use std::borrow::Cow;

use userpic_engine::coords::{Rect, Vec2};
use userpic_engine::geometry::{clamp, AnchorCache, BadgeAnchor, Corner};
use userpic_engine::paint::Color;
use userpic_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Height bounds for badges that show text.
const MIN_SIZE: f32 = 15.0;
const MAX_SIZE: f32 = 40.0;
/// Height of a content-less dot badge.
const DOT_SIZE: f32 = 10.0;
/// Label font size as a fraction of the badge height.
const FONT_SCALE: f32 = 0.6;

// ── BadgeValue ────────────────────────────────────────────────────────────

/// What a badge shows.
///
/// There is no "empty" variant: an absent or suppressed badge is `None`
/// wherever a badge is optional. The `from_*` constructors apply the
/// suppression rules (`false`, `0` and `""` show nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeValue {
    /// A plain colored dot.
    Dot,
    /// A counter, saturating at the badge limit.
    Count(i64),
    /// Verbatim text, typically an emoji status.
    Label(String),
}

impl BadgeValue {
    pub fn from_bool(v: bool) -> Option<Self> {
        v.then_some(BadgeValue::Dot)
    }

    pub fn from_count(n: i64) -> Option<Self> {
        (n != 0).then_some(BadgeValue::Count(n))
    }

    pub fn from_label(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        (!s.is_empty()).then_some(BadgeValue::Label(s))
    }

    /// `true` for values rendered as text.
    #[inline]
    pub fn has_content(&self) -> bool {
        !matches!(self, BadgeValue::Dot)
    }

    /// Text to render. Counts above a positive `limit` show as `"{limit}+"`.
    pub fn display(&self, limit: u32) -> Option<Cow<'_, str>> {
        match self {
            BadgeValue::Dot => None,
            BadgeValue::Count(n) if limit > 0 && *n > i64::from(limit) => {
                Some(Cow::Owned(format!("{limit}+")))
            }
            BadgeValue::Count(n) => Some(Cow::Owned(n.to_string())),
            BadgeValue::Label(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

// ── Badge ─────────────────────────────────────────────────────────────────

/// A small pill or dot, usually overlaid on a corner of an avatar.
///
/// # Example
/// ```rust,ignore
/// Badge::new(BadgeValue::Count(120)).limit(99).color(green)  // shows "99+"
/// ```
#[derive(Debug, Clone)]
pub struct Badge {
    value: BadgeValue,
    size: f32,
    color: Color,
    text_color: Color,
    limit: u32,
    corner_radius: Option<f32>,
    font: Option<FontId>,
}

impl Badge {
    pub fn new(value: BadgeValue) -> Self {
        Self {
            value,
            size: 20.0,
            color: Color::from_srgb_u8(0xff, 0x3b, 0x30, 0xff),
            text_color: Color::white(),
            limit: 99,
            corner_radius: None,
            font: None,
        }
    }

    pub fn value(mut self, v: BadgeValue) -> Self { self.value = v; self }
    /// Requested height for text badges, clamped to `15..=40`.
    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn text_color(mut self, v: Color) -> Self { self.text_color = v; self }
    /// Counts above `limit` saturate. `0` disables saturation.
    pub fn limit(mut self, v: u32) -> Self { self.limit = v; self }
    /// Defaults to half the height (pill / circle).
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = Some(v); self }
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }

    /// Uses `font` unless one was set explicitly.
    pub(crate) fn font_if_unset(mut self, font: Option<FontId>) -> Self {
        self.font = self.font.or(font);
        self
    }

    pub fn badge_value(&self) -> &BadgeValue {
        &self.value
    }

    /// Height of the bounding box. This alone drives corner placement.
    pub fn height(&self) -> f32 {
        if self.value.has_content() {
            clamp(self.size, MIN_SIZE, MAX_SIZE)
        } else {
            DOT_SIZE
        }
    }

    fn font_size(&self, ctx: &LayoutCtx) -> f32 {
        ctx.pixels.round_to_nearest_pixel(self.height() * FONT_SCALE)
    }

    /// Places this badge at `corner` of a parent occupying `parent` with the
    /// resolved corner radius `parent_radius`.
    ///
    /// `cache` memoizes the offset between frames. Returns `None` when the
    /// badge measures empty.
    pub fn anchored_rect(
        &self,
        parent: Rect,
        parent_radius: f32,
        corner: Corner,
        cache: &AnchorCache,
        ctx: &LayoutCtx,
    ) -> Option<Rect> {
        let size = self.measure(Constraints::unbounded(), ctx);
        let anchor = BadgeAnchor {
            parent_size: parent.min_side(),
            parent_radius,
            badge_size: size.y,
            corner,
        };
        cache.get(anchor, ctx.pixels).map(|offset| offset.place(parent, size))
    }
}

impl Widget for Badge {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let height = self.height();
        let width = match (self.value.display(self.limit), self.font) {
            (Some(text), Some(font)) => {
                let font_size = self.font_size(ctx);
                // Text plus a half-font-size margin on each side.
                let text_w = ctx.measure_text(&text, font, font_size).x;
                (text_w + font_size).max(height)
            }
            _ => height,
        };
        constraints.constrain(Vec2::new(width, height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let radius = self.corner_radius.unwrap_or(rect.size.y / 2.0);
        painter.fill_rounded_rect(rect, radius, self.color);

        let Some(text) = self.value.display(self.limit) else {
            return;
        };
        let Some(font) = self.font else {
            log::warn!("badge {:?} has text but no font; drawing background only", text);
            return;
        };
        let font_size = self.font_size(&painter.layout_ctx());
        painter.text_centered(&text, font, font_size, self.text_color, rect);
    }
}
