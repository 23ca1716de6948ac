use std::fmt;

use crate::coords::{CornerRadii, Rect};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Where the host should load an image from.
///
/// The engine never fetches or decodes images. It records the source in an
/// [`ImageCmd`] and the host reports load failures back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ImageSource {
    /// Remote or file URI.
    Uri(String),
    /// The host's bundled default avatar picture.
    #[default]
    Placeholder,
}

impl ImageSource {
    pub fn uri(uri: impl Into<String>) -> Self {
        ImageSource::Uri(uri.into())
    }

    /// Gravatar URI for a precomputed address hash, requested at
    /// `pixel_size` device pixels. `d=404` makes unknown addresses fail so
    /// the caller falls back to its default image.
    pub fn gravatar(email_hash: &str, pixel_size: u32) -> Self {
        ImageSource::Uri(format!("https://www.gravatar.com/avatar/{email_hash}?s={pixel_size}&d=404"))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Uri(uri) => f.write_str(uri),
            ImageSource::Placeholder => f.write_str("<placeholder>"),
        }
    }
}

/// Image draw payload: `source` scaled to fill `rect`, clipped to `radii`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub source: ImageSource,
}

impl DrawList {
    /// Records an image draw command.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, source: ImageSource) {
        self.push(z, DrawCmd::Image(ImageCmd { rect, radii, source }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravatar_uri_format() {
        let src = ImageSource::gravatar("0bc83cb571cd1c50ba6f3e8a78ef1346", 150);
        assert_eq!(
            src,
            ImageSource::uri(
                "https://www.gravatar.com/avatar/0bc83cb571cd1c50ba6f3e8a78ef1346?s=150&d=404"
            )
        );
    }

    #[test]
    fn default_is_placeholder() {
        assert_eq!(ImageSource::default(), ImageSource::Placeholder);
        assert_eq!(ImageSource::Placeholder.to_string(), "<placeholder>");
    }
}
