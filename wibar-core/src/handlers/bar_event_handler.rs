use crate::bar_event::BarEvent;
use crate::config::Config;
use crate::models::Manager;
use crate::placement_servers::PlacementServer;

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    /// Apply an event from the windowing side.
    /// Returns true if any bar was moved or removed.
    pub fn bar_event_handler(&mut self, event: BarEvent) -> bool {
        match event {
            BarEvent::ScreenRemoved(screen) => self.screen_removed_handler(screen),
            BarEvent::ScreenChanged(screen) => self.screen_changed_handler(screen),
        }
    }
}
