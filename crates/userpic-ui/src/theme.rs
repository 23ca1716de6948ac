//! Light / dark appearance, passed explicitly down the tree.

use userpic_engine::paint::Color;

/// Host color scheme.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Palette selector for the current appearance.
///
/// Owned by [`SceneConfig`](crate::scene::SceneConfig) and reachable from
/// [`Painter::theme`](crate::painter::Painter::theme). There is no global
/// lookup: switching appearance means building the next frame with a
/// different theme.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Theme {
    pub appearance: Appearance,
}

impl Theme {
    pub const LIGHT: Theme = Theme { appearance: Appearance::Light };
    pub const DARK: Theme = Theme { appearance: Appearance::Dark };

    #[inline]
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self.appearance {
            Appearance::Light => light,
            Appearance::Dark => dark,
        }
    }

    /// Background behind initials and transparent images.
    pub fn placeholder_background(self) -> Color {
        self.pick(Color::from_srgb_u8(0xae, 0xae, 0xb2, 0xff), Color::from_srgb_u8(0x63, 0x63, 0x66, 0xff))
    }
}
