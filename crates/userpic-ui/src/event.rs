use userpic_engine::scene::ImageSource;

/// Events routed through the widget tree.
///
/// These come from the host, not from pointer input: avatars are passive and
/// only react to what the image loader reports.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The host failed to load `source` (network error, 404, decode failure).
    ImageFailed { source: ImageSource },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
