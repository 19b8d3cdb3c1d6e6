#[cfg(test)]
mod mock_placement_server;
mod geometry_placement_server;

use crate::config::Config;
use crate::models::{BBox, Bar, ScreenId};
use crate::placement_request::PlacementRequest;

#[cfg(test)]
pub use self::mock_placement_server::MockPlacementServer;
pub use self::geometry_placement_server::GeometryPlacementServer;

/// Token for a live attachment. It is handed back to the server to undo
/// the attachment, which consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DetachHandle(u64);

impl DetachHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// The windowing side: knows about screens and fonts, and moves bars.
pub trait PlacementServer {
    fn new(config: &impl Config) -> Self;

    /// Apply `request` to the bar's surface. Returns a handle when the
    /// request asked for the bar to stay attached.
    fn place(&mut self, bar: &Bar, request: &PlacementRequest) -> Option<DetachHandle>;

    /// Undo an attachment along with any workarea it reserved.
    fn detach(&mut self, handle: DetachHandle);

    fn screen_geometry(&self, screen: ScreenId) -> Option<BBox>;

    fn primary_screen(&self) -> Option<ScreenId>;

    fn font_height(&self, font: Option<&str>) -> u32;
}
