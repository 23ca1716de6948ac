use userpic_engine::coords::{Rect, Vec2};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Main axis of a [`Flex`] container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    #[inline]
    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    #[inline]
    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }
}

/// Lays children out along one axis with fixed spacing, centered on the
/// cross axis. Children keep their natural size.
///
/// Image failures are broadcast: every child sees the event, since several
/// avatars may show the same broken URL.
///
/// # Example
/// ```rust,ignore
/// Flex::row()
///     .spacing(16.0)
///     .child(Userpic::new().corner_radius(0.0))
///     .child(Userpic::new().corner_radius(Dimension::Percent(25)))
/// ```
pub struct Flex {
    axis: Axis,
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
}

impl Flex {
    pub fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new(), spacing: 0.0, padding: Edges::default() }
    }

    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Child rects inside `rect`, in insertion order.
    fn layout(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = inset_rect(rect, self.padding);
        let child_c = Constraints::loose(inner.size);
        let cross_extent = self.axis.cross(inner.size);

        let mut main = self.axis.main(inner.origin);
        let cross_origin = self.axis.cross(inner.origin);
        self.children
            .iter()
            .map(|child| {
                let size = child.measure(child_c, ctx);
                let cross = cross_origin + (cross_extent - self.axis.cross(size)) * 0.5;
                let origin = self.axis.pack(main, cross);
                main += self.axis.main(size) + self.spacing;
                Rect::from_origin_size(origin, size)
            })
            .collect()
    }
}

impl Widget for Flex {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_c = constraints.shrink(self.padding);

        let mut main: f32 = 0.0;
        let mut cross: f32 = 0.0;
        for child in &self.children {
            let s = child.measure(child_c, ctx);
            main += self.axis.main(s);
            cross = cross.max(self.axis.cross(s));
        }
        main += self.spacing * self.children.len().saturating_sub(1) as f32;

        let padding = Vec2::new(self.padding.h(), self.padding.v());
        constraints.constrain(self.axis.pack(main, cross) + padding)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, child_rect) in self.children.iter().zip(self.layout(rect, &ctx)) {
            child.paint(painter, child_rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.layout(rect, ctx);
        let mut result = EventResult::Ignored;
        for (child, child_rect) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, child_rect, ctx).is_consumed() {
                result = EventResult::Consumed;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userpic_engine::coords::PixelRatio;
    use userpic_engine::text::FontSystem;

    struct Fixed(Vec2);

    impl Widget for Fixed {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
    }

    fn ctx(fonts: &FontSystem) -> LayoutCtx<'_> {
        LayoutCtx::new(fonts, PixelRatio::ONE)
    }

    #[test]
    fn row_measures_sum_plus_spacing() {
        let fonts = FontSystem::new();
        let row = Flex::row()
            .spacing(10.0)
            .padding(Edges::all(5.0))
            .child(Fixed(Vec2::new(30.0, 30.0)))
            .child(Fixed(Vec2::new(50.0, 50.0)));
        let size = row.measure(Constraints::unbounded(), &ctx(&fonts));
        assert_eq!(size, Vec2::new(100.0, 60.0));
    }

    #[test]
    fn row_centers_on_cross_axis() {
        let fonts = FontSystem::new();
        let row = Flex::row()
            .spacing(10.0)
            .child(Fixed(Vec2::new(30.0, 30.0)))
            .child(Fixed(Vec2::new(50.0, 50.0)));
        let rects = row.layout(Rect::new(0.0, 0.0, 90.0, 50.0), &ctx(&fonts));
        assert_eq!(rects, vec![Rect::new(0.0, 10.0, 30.0, 30.0), Rect::new(40.0, 0.0, 50.0, 50.0)]);
    }

    #[test]
    fn column_stacks_vertically() {
        let fonts = FontSystem::new();
        let col = Flex::column()
            .spacing(4.0)
            .children([Fixed(Vec2::new(20.0, 10.0)), Fixed(Vec2::new(40.0, 10.0))]);
        let c = ctx(&fonts);
        assert_eq!(col.measure(Constraints::unbounded(), &c), Vec2::new(40.0, 24.0));
        let rects = col.layout(Rect::new(0.0, 0.0, 40.0, 24.0), &c);
        assert_eq!(rects[0], Rect::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(rects[1], Rect::new(0.0, 14.0, 40.0, 10.0));
    }
}
