use crate::models::ScreenId;

/// Notifications from the windowing side that affect docked bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEvent {
    ScreenRemoved(ScreenId),
    ScreenChanged(ScreenId), // Geometry of a screen changed.
}
