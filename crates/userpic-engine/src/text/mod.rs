//! Font loading and single-line text measurement.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
