use userpic_engine::coords::{CornerRadii, PixelRatio, Rect, Vec2};
use userpic_engine::paint::Color;
use userpic_engine::scene::{DrawList, ImageSource, ZIndex};
use userpic_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;
use crate::theme::Theme;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a shape-level API and carries the
/// frame's display density and theme, so widgets never consult globals.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    pixels: PixelRatio,
    theme: Theme,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        pixels: PixelRatio,
        theme: Theme,
    ) -> Self {
        Self { draw_list, font_system, pixels, theme, z: 0 }
    }

    #[inline]
    pub fn pixels(&self) -> PixelRatio {
        self.pixels
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    ///
    /// Containers use this inside `paint` to re-measure their children. The
    /// context does not borrow the painter itself.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx::new(self.font_system, self.pixels)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle. `radius = 0.0` gives sharp corners.
    ///
    /// A square rect rounded to half its side is recorded as a circle, which
    /// renderers draw more cheaply and more smoothly.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let z = self.next_z();
        if rect.size.x == rect.size.y && radius >= rect.size.x / 2.0 && rect.size.x > 0.0 {
            self.draw_list.push_circle(z, rect.center(), rect.size.x / 2.0, color);
        } else {
            self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius.max(0.0)), color);
        }
    }

    /// Image filling `rect`, clipped to a uniform corner `radius`.
    pub fn image(&mut self, rect: Rect, radius: f32, source: ImageSource) {
        let z = self.next_z();
        self.draw_list.push_image(z, rect, CornerRadii::all(radius.max(0.0)), source);
    }

    /// One line of text with its top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    /// One line of text centered inside `rect`, origin snapped to the pixel grid.
    pub fn text_centered(&mut self, text: &str, font: FontId, size: f32, color: Color, rect: Rect) {
        let measured = self.layout_ctx().measure_text(text, font, size);
        let origin = Rect::centered_at(rect.center(), measured).origin;
        let origin = Vec2::new(
            self.pixels.round_to_nearest_pixel(origin.x),
            self.pixels.round_to_nearest_pixel(origin.y),
        );
        self.text(text, font, size, color, origin);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userpic_engine::scene::DrawCmd;

    fn paint_into(f: impl FnOnce(&mut Painter<'_>)) -> DrawList {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, &fonts, PixelRatio::ONE, Theme::LIGHT);
            f(&mut painter);
        }
        list
    }

    #[test]
    fn full_round_square_becomes_circle() {
        let list = paint_into(|p| p.fill_rounded_rect(Rect::new(0.0, 0.0, 40.0, 40.0), 20.0, Color::white()));
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::new(20.0, 20.0));
                assert_eq!(c.radius, 20.0);
            }
            other => panic!("expected circle, got {}", other.kind()),
        }
    }

    #[test]
    fn pill_stays_rounded_rect() {
        let list = paint_into(|p| p.fill_rounded_rect(Rect::new(0.0, 0.0, 30.0, 20.0), 10.0, Color::white()));
        assert!(matches!(&list.items()[0].cmd, DrawCmd::RoundedRect(r) if r.radii == CornerRadii::all(10.0)));
    }

    #[test]
    fn z_increases_per_command() {
        let list = paint_into(|p| {
            p.fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, Color::white());
            p.image(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, ImageSource::Placeholder);
        });
        assert_eq!(list.items()[0].key.z, ZIndex::new(0));
        assert_eq!(list.items()[1].key.z, ZIndex::new(1));
    }
}
