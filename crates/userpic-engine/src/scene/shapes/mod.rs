pub(crate) mod circle;
pub(crate) mod image;
pub(crate) mod rounded_rect;
pub(crate) mod text;
