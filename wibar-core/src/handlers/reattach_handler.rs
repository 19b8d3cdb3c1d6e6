use crate::config::Config;
use crate::models::{Bar, BarId, Manager, ScreenId};
use crate::placement_servers::PlacementServer;

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    /// Re-attaches the attached bars sharing `changed`'s screen so their
    /// margins account for its new footprint.
    pub(crate) fn reattach(&mut self, changed: BarId) {
        if let Some(screen) = self.state.bar(changed).and_then(Bar::screen) {
            self.reattach_screen(screen, Some(changed));
        }
    }

    /// Every sibling is detached before any of them is attached again, so
    /// none of them is placed against a half-updated layout.
    pub(crate) fn reattach_screen(&mut self, screen: ScreenId, except: Option<BarId>) {
        let mut detached = vec![];
        for id in self.state.bars_on_screen(screen) {
            if Some(id) != except && self.detach(id) {
                detached.push(id);
            }
        }
        if !detached.is_empty() {
            tracing::debug!("Re-attaching {} bar(s) on {}", detached.len(), screen);
        }
        for id in detached {
            self.attach(id);
        }
    }
}
