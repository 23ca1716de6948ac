use userpic_engine::coords::{PixelRatio, Rect, Vec2};
use userpic_engine::geometry::{resolve_radius, AnchorCache, Corner, Dimension};
use userpic_engine::paint::Color;
use userpic_engine::scene::ImageSource;
use userpic_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::identity::{gravatar_hash, initials, name_color};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::badge::{Badge, BadgeValue};

/// Initials font size as a fraction of the avatar side.
const INITIALS_SCALE: f32 = 1.0 / 2.5;

/// A user picture: photo, Gravatar, initials or a placeholder, clipped to a
/// square with rounded corners, with an optional corner badge.
///
/// Image selection, in order: an explicit [`source`](Self::source), a
/// Gravatar built from [`email`](Self::email), then
/// [`default_source`](Self::default_source). When the host reports that the
/// chosen image failed to load, the default is shown instead, and initials
/// replace the default whenever a name is known.
///
/// The widget keeps that fallback and its badge placement across frames, so
/// hold it in the tree and paint with [`UiScene::frame_ref`](crate::scene::UiScene::frame_ref).
///
/// # Example
/// ```rust,ignore
/// Userpic::new()
///     .size(50.0)
///     .corner_radius("25%".parse().unwrap_or_default())
///     .name("Jason Smith")
///     .colorize(true)
///     .badge(BadgeValue::from_count(3))
///     .badge_position(Corner::BottomRight)
/// ```
pub struct Userpic {
    size: f32,
    corner_radius: Dimension,
    name: Option<String>,
    colorize: bool,
    source: Option<ImageSource>,
    email_hash: Option<String>,
    default_source: ImageSource,
    font: Option<FontId>,
    text_color: Color,
    badge: Option<BadgeValue>,
    badge_color: Option<Color>,
    badge_style: Badge,
    badge_position: Corner,

    /// Source the host reported as broken. Cleared implicitly when the
    /// requested source changes to something else.
    failed: Option<ImageSource>,
    anchor: AnchorCache,
}

impl Userpic {
    pub fn new() -> Self {
        Self {
            size: 50.0,
            corner_radius: Dimension::CIRCLE,
            name: None,
            colorize: false,
            source: None,
            email_hash: None,
            default_source: ImageSource::Placeholder,
            font: None,
            text_color: Color::white(),
            badge: None,
            badge_color: None,
            badge_style: Badge::new(BadgeValue::Dot),
            badge_position: Corner::TopRight,
            failed: None,
            anchor: AnchorCache::new(),
        }
    }

    /// Side length in logical pixels.
    pub fn size(mut self, v: f32) -> Self { self.size = v; self }
    /// Pixels or `0%..=50%` of the side. Defaults to a circle.
    pub fn corner_radius(mut self, v: impl Into<Dimension>) -> Self { self.corner_radius = v.into(); self }
    pub fn name(mut self, v: impl Into<String>) -> Self { self.name = Some(v.into()); self }
    /// Paint initials on a color derived from the name instead of the theme grey.
    pub fn colorize(mut self, v: bool) -> Self { self.colorize = v; self }
    pub fn source(mut self, v: ImageSource) -> Self { self.source = Some(v); self }
    /// Email address used to look up a Gravatar.
    pub fn email(mut self, v: &str) -> Self { self.email_hash = Some(gravatar_hash(v)); self }
    /// Like [`email`](Self::email) with the address already hashed
    /// (hex MD5 of the trimmed, lowercased address).
    pub fn email_hash(mut self, v: impl Into<String>) -> Self { self.email_hash = Some(v.into()); self }
    pub fn default_source(mut self, v: ImageSource) -> Self { self.default_source = v; self }
    /// Font for the initials and the badge label. Without one, initials are
    /// skipped and only the background is drawn.
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }
    pub fn text_color(mut self, v: Color) -> Self { self.text_color = v; self }
    /// `None` hides the badge; see the `BadgeValue::from_*` constructors.
    pub fn badge(mut self, v: Option<BadgeValue>) -> Self { self.badge = v; self }
    pub fn badge_color(mut self, v: Color) -> Self { self.badge_color = Some(v); self }
    /// Size, limit, colors and font for the badge. Its value is ignored.
    pub fn badge_style(mut self, v: Badge) -> Self { self.badge_style = v; self }
    pub fn badge_position(mut self, v: Corner) -> Self { self.badge_position = v; self }

    /// Image the avatar asks the host for, before any failure fallback.
    pub fn requested_source(&self, pixels: PixelRatio) -> ImageSource {
        if let Some(source) = &self.source {
            source.clone()
        } else if let Some(hash) = &self.email_hash {
            ImageSource::gravatar(hash, pixels.pixel_size_for_layout_size(self.size))
        } else {
            self.default_source.clone()
        }
    }

    /// Image currently shown: the requested one unless the host reported it
    /// as failed.
    pub fn current_source(&self, pixels: PixelRatio) -> ImageSource {
        let requested = self.requested_source(pixels);
        if self.failed.as_ref() == Some(&requested) {
            self.default_source.clone()
        } else {
            requested
        }
    }

    /// Initials to draw, if the default image is showing and a name is set.
    pub fn initials(&self, pixels: PixelRatio) -> Option<String> {
        let name = self.name.as_deref()?;
        if self.current_source(pixels) != self.default_source {
            return None;
        }
        let text = initials(name);
        (!text.is_empty()).then_some(text)
    }

    fn badge_widget(&self) -> Option<Badge> {
        let value = self.badge.clone()?;
        let mut badge = self.badge_style.clone().value(value).font_if_unset(self.font);
        if let Some(color) = self.badge_color {
            badge = badge.color(color);
        }
        Some(badge)
    }
}

impl Default for Userpic {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Userpic {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        // The badge overhangs and does not take part in layout.
        constraints.constrain(Vec2::splat(self.size.max(0.0)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let pixels = painter.pixels();
        let side = rect.min_side();
        let shape = Rect::from_origin_size(rect.origin, Vec2::splat(side));
        let radius = resolve_radius(self.corner_radius, side);

        let initials = self.initials(pixels);
        let background = match (&self.name, &initials) {
            (Some(name), Some(_)) if self.colorize => name_color(name),
            _ => painter.theme().placeholder_background(),
        };
        painter.fill_rounded_rect(shape, radius, background);

        match (initials, self.font) {
            (Some(text), Some(font)) => {
                let font_size = pixels.round_to_nearest_pixel(side * INITIALS_SCALE);
                painter.text_centered(&text, font, font_size, self.text_color, shape);
            }
            (Some(text), None) => {
                log::warn!("userpic initials {text:?} need a font; drawing background only");
            }
            (None, _) => painter.image(shape, radius, self.current_source(pixels)),
        }

        if let Some(badge) = self.badge_widget() {
            let ctx = painter.layout_ctx();
            if let Some(badge_rect) =
                badge.anchored_rect(shape, radius, self.badge_position, &self.anchor, &ctx)
            {
                badge.paint(painter, badge_rect);
            }
        }
    }

    fn on_event(&mut self, event: &UiEvent, _rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        match event {
            UiEvent::ImageFailed { source } => {
                let requested = self.requested_source(ctx.pixels);
                if *source != requested || requested == self.default_source {
                    return EventResult::Ignored;
                }
                log::debug!("userpic image {source} failed; showing {}", self.default_source);
                self.failed = Some(requested);
                EventResult::Consumed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userpic_engine::geometry::compute_badge_offset;
    use userpic_engine::scene::{DrawCmd, DrawList};
    use userpic_engine::text::FontSystem;

    use crate::theme::Theme;

    const HASH: &str = "0bc83cb571cd1c50ba6f3e8a78ef1346";

    fn paint(userpic: &Userpic) -> DrawList {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &fonts, PixelRatio::ONE, Theme::LIGHT);
            let size = userpic.size;
            userpic.paint(&mut painter, Rect::new(0.0, 0.0, size, size));
        }
        list
    }

    fn fail(userpic: &mut Userpic, source: ImageSource) -> EventResult {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts, PixelRatio::ONE);
        userpic.on_event(&UiEvent::ImageFailed { source }, Rect::default(), &ctx)
    }

    fn image_of(list: &DrawList) -> Option<&ImageSource> {
        list.items().iter().find_map(|item| match &item.cmd {
            DrawCmd::Image(img) => Some(&img.source),
            _ => None,
        })
    }

    // ── image selection ───────────────────────────────────────────────────

    #[test]
    fn default_image_when_nothing_set() {
        let list = paint(&Userpic::new());
        assert_eq!(image_of(&list), Some(&ImageSource::Placeholder));
    }

    #[test]
    fn explicit_source_wins_over_gravatar() {
        let u = Userpic::new().email_hash(HASH).source(ImageSource::uri("image.png"));
        assert_eq!(u.current_source(PixelRatio::ONE), ImageSource::uri("image.png"));
    }

    #[test]
    fn email_is_normalized_and_hashed() {
        let u = Userpic::new().email(" JasonSmith@mailto.plus ");
        let expected = ImageSource::gravatar("3d63606da8e8ebd04fb6331c035223bb", 50);
        assert_eq!(u.current_source(PixelRatio::ONE), expected);
    }

    #[test]
    fn gravatar_requested_at_device_pixels() {
        let u = Userpic::new().email_hash(HASH);
        assert_eq!(u.current_source(PixelRatio::new(3.0)), ImageSource::gravatar(HASH, 150));
    }

    // ── failure fallback ──────────────────────────────────────────────────

    #[test]
    fn failed_gravatar_falls_back_to_initials() {
        let mut u = Userpic::new().name("User Name").email_hash(HASH);
        assert_eq!(u.initials(PixelRatio::ONE), None);

        let gravatar = u.requested_source(PixelRatio::ONE);
        assert_eq!(fail(&mut u, gravatar), EventResult::Consumed);
        assert_eq!(u.initials(PixelRatio::ONE).as_deref(), Some("UN"));
    }

    #[test]
    fn failed_source_falls_back_to_default_image() {
        let mut u = Userpic::new()
            .source(ImageSource::uri("image.png"))
            .default_source(ImageSource::uri("default.png"));
        fail(&mut u, ImageSource::uri("image.png"));
        assert_eq!(image_of(&paint(&u)), Some(&ImageSource::uri("default.png")));
    }

    #[test]
    fn unrelated_failures_are_ignored() {
        let mut u = Userpic::new().source(ImageSource::uri("image.png"));
        assert_eq!(fail(&mut u, ImageSource::uri("other.png")), EventResult::Ignored);
        assert_eq!(fail(&mut u, ImageSource::Placeholder), EventResult::Ignored);
        assert_eq!(u.current_source(PixelRatio::ONE), ImageSource::uri("image.png"));
    }

    #[test]
    fn empty_name_keeps_default_image() {
        let u = Userpic::new().name("").default_source(ImageSource::uri("default.png"));
        assert_eq!(u.initials(PixelRatio::ONE), None);
        assert_eq!(image_of(&paint(&u)), Some(&ImageSource::uri("default.png")));
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn circle_by_default_square_on_request() {
        let list = paint(&Userpic::new());
        assert!(matches!(&list.items()[0].cmd, DrawCmd::Circle(c) if c.radius == 25.0));

        let list = paint(&Userpic::new().corner_radius(0.0));
        assert!(matches!(&list.items()[0].cmd, DrawCmd::RoundedRect(r) if r.radii.top_left == 0.0));
    }

    #[test]
    fn colorized_initials_use_name_color() {
        let list = paint(&Userpic::new().name("Emma Miller").colorize(true));
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => assert_eq!(c.color, name_color("Emma Miller")),
            other => panic!("expected circle background, got {}", other.kind()),
        }
        assert_eq!(image_of(&list), None);
    }

    #[test]
    fn plain_initials_use_theme_grey() {
        let list = paint(&Userpic::new().name("Nick"));
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => assert_eq!(c.color, Theme::LIGHT.placeholder_background()),
            other => panic!("expected circle background, got {}", other.kind()),
        }
    }

    #[test]
    fn initials_without_font_draw_background_only() {
        let list = paint(&Userpic::new().name("Nick"));
        assert_eq!(list.len(), 1);
        assert_eq!(image_of(&list), None);
    }

    // ── badge ─────────────────────────────────────────────────────────────

    fn badge_rect(list: &DrawList) -> Rect {
        match list.items().last().map(|item| &item.cmd) {
            Some(DrawCmd::Circle(c)) => Rect::centered_at(c.center, Vec2::splat(c.radius * 2.0)),
            Some(DrawCmd::RoundedRect(r)) => r.rect,
            _ => panic!("badge not painted last"),
        }
    }

    #[test]
    fn badge_on_circle_at_every_corner() {
        // 50px circle, 20px badge: 25 × 0.2929 - 10 = -2.68 → -3.
        let offset = compute_badge_offset(50.0, 25.0, 20.0, PixelRatio::ONE);
        assert_eq!(offset, -3.0);

        let expected = [
            (Corner::TopLeft, Rect::new(-3.0, -3.0, 20.0, 20.0)),
            (Corner::TopRight, Rect::new(33.0, -3.0, 20.0, 20.0)),
            (Corner::BottomLeft, Rect::new(-3.0, 33.0, 20.0, 20.0)),
            (Corner::BottomRight, Rect::new(33.0, 33.0, 20.0, 20.0)),
        ];
        for (corner, rect) in expected {
            let u = Userpic::new().badge(BadgeValue::from_count(1)).badge_position(corner);
            assert_eq!(badge_rect(&paint(&u)), rect, "{corner}");
        }
    }

    #[test]
    fn badge_on_square_at_every_corner() {
        let expected = [
            (Corner::TopLeft, Rect::new(-5.0, -5.0, 20.0, 20.0)),
            (Corner::TopRight, Rect::new(35.0, -5.0, 20.0, 20.0)),
            (Corner::BottomLeft, Rect::new(-5.0, 35.0, 20.0, 20.0)),
            (Corner::BottomRight, Rect::new(35.0, 35.0, 20.0, 20.0)),
        ];
        for (corner, rect) in expected {
            let u = Userpic::new()
                .corner_radius(0.0)
                .badge(BadgeValue::from_count(1))
                .badge_position(corner);
            assert_eq!(badge_rect(&paint(&u)), rect, "{corner}");
        }
    }

    #[test]
    fn suppressed_badge_paints_nothing() {
        let plain = paint(&Userpic::new()).len();
        let hidden = paint(&Userpic::new().badge(BadgeValue::from_count(0))).len();
        assert_eq!(plain, hidden);
    }

    #[test]
    fn badge_offset_is_memoized_across_frames() {
        let u = Userpic::new().badge(BadgeValue::from_bool(true));
        paint(&u);
        paint(&u);
        assert_eq!(u.anchor.recomputations(), 1);
    }
}
