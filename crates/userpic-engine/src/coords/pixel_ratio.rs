/// Logical-to-physical pixel density of the target display.
///
/// A ratio of `2.0` means one logical pixel covers two device pixels per axis,
/// so positions snapped with [`round_to_nearest_pixel`](Self::round_to_nearest_pixel)
/// land on multiples of `0.5`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRatio(f32);

impl PixelRatio {
    /// Density of a standard (1×) display.
    pub const ONE: PixelRatio = PixelRatio(1.0);

    /// Creates a ratio. Non-finite or non-positive values fall back to `1.0`.
    #[inline]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            Self(scale)
        } else {
            Self::ONE
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Snaps a logical length to the nearest physical pixel.
    ///
    /// Halves round toward positive infinity (`-2.5 → -2.0` at 1×), which keeps
    /// negative insets stable when the parent grows by one pixel.
    #[inline]
    pub fn round_to_nearest_pixel(self, value: f32) -> f32 {
        (value * self.0 + 0.5).floor() / self.0
    }

    /// Converts a logical length into a whole number of physical pixels.
    ///
    /// Negative and NaN inputs yield `0`.
    #[inline]
    pub fn pixel_size_for_layout_size(self, value: f32) -> u32 {
        // `as` saturates: NaN → 0, negatives → 0.
        (value * self.0 + 0.5).floor() as u32
    }
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}
