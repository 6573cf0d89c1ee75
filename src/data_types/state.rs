use serde::{Deserialize, Serialize};
use std::fmt;

/// Gesture currently driving pointer-move handling.
///
/// Exactly one state is active at a time; `None` outside of a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    None,
    DragZooming,
    ScrollZooming,
    Panning,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::DragZooming => "drag-zooming",
            Self::ScrollZooming => "scroll-zooming",
            Self::Panning => "panning",
        };
        f.write_str(name)
    }
}

/// Listener lifecycle of an interaction controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, listeners not yet attached.
    #[default]
    Pending,
    Ready,
    TornDown,
}

/// Events proposed to the owner of the view extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionEvent {
    ViewExtentChanged(crate::data_types::ViewExtent),
    ViewExtentReset,
}
