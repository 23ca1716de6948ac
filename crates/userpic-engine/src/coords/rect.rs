use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` whose center sits at `center`.
    #[inline]
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Length of the shorter side. Avatars treat this as their square dimension.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.size.x.min(self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn centered_at_places_origin() {
        let rect = Rect::centered_at(Vec2::new(25.0, 25.0), Vec2::new(10.0, 6.0));
        assert_eq!(rect, r(20.0, 22.0, 10.0, 6.0));
        assert_eq!(rect.center(), Vec2::new(25.0, 25.0));
        assert_eq!(rect.max(), Vec2::new(30.0, 28.0));
    }

    #[test]
    fn min_side_picks_shorter() {
        assert_eq!(r(0.0, 0.0, 50.0, 40.0).min_side(), 40.0);
        assert_eq!(r(0.0, 0.0, 30.0, 40.0).min_side(), 30.0);
    }
}
