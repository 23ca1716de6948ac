//! Userpic UI: avatar and badge widgets on a small retained widget tree.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use userpic_ui::prelude::*;
//!
//! let mut scene = UiScene::new(SceneConfig { pixels: PixelRatio::new(2.0), theme: Theme::DARK });
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! let mut root: Element = Userpic::new()
//!     .name("Jason Smith")
//!     .email("jason@example.com")
//!     .font(font)
//!     .badge(BadgeValue::from_count(3))
//!     .into();
//!
//! // In your frame callback, passing along any image loads that failed:
//! let input = UiInput { image_failures };
//! let draw_list = scene.frame_ref(&mut root, viewport, &input);
//! ```
//!
//! # Anchoring badges on other shapes
//!
//! [`Badged`](widgets::badged::Badged) places a badge on any widget, given
//! how rounded that widget's corners are. The placement math itself lives in
//! [`userpic_engine::geometry`].

pub mod constraints;
pub mod event;
pub mod identity;
pub mod painter;
pub mod scene;
pub mod theme;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::identity::{gravatar_hash, initials, name_color};
    pub use crate::painter::Painter;
    pub use crate::scene::{SceneConfig, UiInput, UiScene};
    pub use crate::theme::{Appearance, Theme};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        badge::{Badge, BadgeValue},
        badged::Badged,
        flex::{Axis, Flex},
        userpic::Userpic,
    };

    // Re-export the engine primitives everyone needs.
    pub use userpic_engine::coords::{PixelRatio, Rect, Vec2};
    pub use userpic_engine::geometry::{Corner, Dimension};
    pub use userpic_engine::paint::Color;
    pub use userpic_engine::scene::{DrawCmd, DrawList, ImageSource};
    pub use userpic_engine::text::FontId;
}
