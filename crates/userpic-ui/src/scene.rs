use userpic_engine::coords::{PixelRatio, Rect, Vec2};
use userpic_engine::scene::{DrawList, ImageSource};
use userpic_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::theme::Theme;
use crate::widget::{Element, Widget};

// ── SceneConfig ───────────────────────────────────────────────────────────

/// Per-display settings for a [`UiScene`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneConfig {
    /// Density of the target display.
    pub pixels: PixelRatio,
    pub theme: Theme,
}

// ── UiInput ───────────────────────────────────────────────────────────────

/// What the host reports back for one frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Image sources that failed to load since the previous frame.
    pub image_failures: Vec<ImageSource>,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns fonts and the draw list across frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new(SceneConfig { pixels: PixelRatio::new(2.0), ..Default::default() });
/// let font = ui.load_font(include_bytes!("font.ttf"))?;
/// let mut root: Element = Userpic::new().name("Nick").font(font).into();
///
/// // Each frame:
/// let draw_list = ui.frame_ref(&mut root, viewport, &UiInput::default());
/// host_renderer.draw(draw_list);
/// ```
pub struct UiScene {
    /// Public so the host renderer can rasterize glyphs with the same fonts.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame.
    pub draw_list: DrawList,
    config: SceneConfig,
}

impl UiScene {
    pub fn new(config: SceneConfig) -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new(), config }
    }

    pub fn config(&self) -> SceneConfig {
        self.config
    }

    /// Changes density or theme for subsequent frames.
    pub fn set_config(&mut self, config: SceneConfig) {
        if config != self.config {
            log::debug!("scene config changed: {:?} -> {:?}", self.config, config);
        }
        self.config = config;
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Routes host events, then measures and paints `root`.
    ///
    /// The root is borrowed so widget state (image fallbacks, memoized badge
    /// offsets) persists between frames. Events are delivered before painting
    /// so a reported failure is reflected in the same frame.
    #[must_use]
    pub fn frame_ref(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx::new(&self.font_system, self.config.pixels);
        let rect = Rect::from_origin_size(Vec2::zero(), viewport);

        for source in &input.image_failures {
            let event = UiEvent::ImageFailed { source: source.clone() };
            if !root.on_event(&event, rect, &ctx).is_consumed() {
                log::debug!("image failure for {source} not claimed by any widget");
            }
        }

        // The root always occupies the full viewport; measuring first lets
        // widgets with layout-dependent state settle before paint.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        {
            let mut painter = Painter::new(
                &mut self.draw_list,
                &self.font_system,
                self.config.pixels,
                self.config.theme,
            );
            root.paint(&mut painter, rect);
        }

        log::trace!("frame recorded {} draw commands", self.draw_list.len());
        &mut self.draw_list
    }

    /// Like [`frame_ref`](Self::frame_ref) for a freshly built tree.
    #[must_use]
    pub fn frame<W: Widget>(&mut self, root: W, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        let mut root = Element::new(root);
        self.frame_ref(&mut root, viewport, input)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userpic_engine::scene::DrawCmd;

    use crate::theme::Appearance;
    use crate::widgets::flex::Flex;
    use crate::widgets::userpic::Userpic;

    fn images(list: &DrawList) -> Vec<ImageSource> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Image(img) => Some(img.source.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn failure_reaches_every_avatar_sharing_the_source() {
        let mut scene = UiScene::default();
        let broken = ImageSource::uri("https://example.invalid/a.png");
        let mut root: Element = Flex::row()
            .child(Userpic::new().source(broken.clone()))
            .child(Userpic::new().source(broken.clone()))
            .child(Userpic::new().source(ImageSource::uri("ok.png")))
            .into();
        let viewport = Vec2::new(400.0, 100.0);

        let list = scene.frame_ref(&mut root, viewport, &UiInput::default());
        assert_eq!(images(list), vec![broken.clone(), broken.clone(), ImageSource::uri("ok.png")]);

        let input = UiInput { image_failures: vec![broken] };
        let list = scene.frame_ref(&mut root, viewport, &input);
        assert_eq!(
            images(list),
            vec![ImageSource::Placeholder, ImageSource::Placeholder, ImageSource::uri("ok.png")]
        );
    }

    #[test]
    fn theme_comes_from_config() {
        let mut scene = UiScene::new(SceneConfig {
            theme: Theme { appearance: Appearance::Dark },
            ..SceneConfig::default()
        });
        let list = scene.frame(Userpic::new(), Vec2::new(50.0, 50.0), &UiInput::default());
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => assert_eq!(c.color, Theme::DARK.placeholder_background()),
            other => panic!("expected circle, got {}", other.kind()),
        }
    }

    #[test]
    fn density_snaps_badge_to_half_pixels() {
        let mut scene = UiScene::new(SceneConfig { pixels: PixelRatio::new(2.0), ..Default::default() });
        let avatar = Userpic::new().badge(crate::widgets::badge::BadgeValue::from_count(1));
        let list = scene.frame(avatar, Vec2::new(50.0, 50.0), &UiInput::default());
        // 7.32 - 10 = -2.68 snaps to -2.5 at 2×.
        match list.items().last().map(|item| &item.cmd) {
            Some(DrawCmd::Circle(c)) => assert_eq!(c.center, Vec2::new(40.0 + 2.5, 7.5)),
            _ => panic!("expected round badge"),
        }
    }
}
