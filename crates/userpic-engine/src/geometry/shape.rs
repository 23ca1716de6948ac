use std::fmt;
use std::str::FromStr;

/// Largest corner radius, as a percentage of the side, that keeps a square
/// shape from turning into an ellipse artifact.
pub const MAX_RADIUS_PERCENT: u32 = 50;

/// A user-supplied length: absolute logical pixels or a percentage of the
/// shape's side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Dimension {
    Px(f32),
    /// Integer percentage. Values above [`MAX_RADIUS_PERCENT`] are kept as
    /// given and rejected at resolve time.
    Percent(u32),
}

impl Dimension {
    /// Fully rounded: a circle for square shapes.
    pub const CIRCLE: Dimension = Dimension::Percent(MAX_RADIUS_PERCENT);

    /// Sharp corners.
    pub const SQUARE: Dimension = Dimension::Px(0.0);

    /// Parses like [`FromStr`], but malformed input becomes [`Dimension::SQUARE`].
    ///
    /// Style values often come from loosely typed sources; a typo should
    /// render a square avatar, not abort the frame.
    pub fn parse_lenient(s: &str) -> Self {
        match s.parse() {
            Ok(d) => d,
            Err(e) => {
                log::debug!("{e}; falling back to square corners");
                Self::SQUARE
            }
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::CIRCLE
    }
}

impl From<f32> for Dimension {
    fn from(v: f32) -> Self {
        Dimension::Px(v)
    }
}

/// Error returned by `Dimension::from_str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionParseError(pub String);

impl fmt::Display for DimensionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid dimension {:?}: expected a number or an integer percentage", self.0)
    }
}

impl std::error::Error for DimensionParseError {}

impl FromStr for Dimension {
    type Err = DimensionParseError;

    /// Accepts `"12"`, `"12.5"` or `"25%"`. Percentages must be plain
    /// integers with no sign, spaces or fraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DimensionParseError(s.to_string());

        if let Some(digits) = s.strip_suffix('%') {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            return digits.parse::<u32>().map(Dimension::Percent).map_err(|_| err());
        }

        match s.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Dimension::Px(v)),
            _ => Err(err()),
        }
    }
}

/// Three-way clamp.
///
/// Callers must pass `min <= max`; the result is unspecified otherwise.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "clamp: min ({min}) > max ({max})");
    value.min(max).max(min)
}

/// Resolves a corner-radius spec against a shape of side `size`.
///
/// The result always satisfies `0 <= radius <= size / 2`. Percentages above
/// 50 % resolve to `0`, as do non-positive or non-finite sizes and NaN pixel
/// values.
pub fn resolve_radius(spec: Dimension, size: f32) -> f32 {
    if !size.is_finite() || size <= 0.0 {
        return 0.0;
    }

    match spec {
        Dimension::Px(v) if v.is_nan() => 0.0,
        Dimension::Px(v) => clamp(v, 0.0, size / 2.0),
        Dimension::Percent(p) if p <= MAX_RADIUS_PERCENT => size * p as f32 / 100.0,
        Dimension::Percent(_) => 0.0,
    }
}

/// [`resolve_radius`] for a raw style string; see [`Dimension::parse_lenient`].
pub fn resolve_radius_str(spec: &str, size: f32) -> f32 {
    resolve_radius(Dimension::parse_lenient(spec), size)
}
