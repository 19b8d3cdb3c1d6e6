use super::{Bar, BarId, Edge, Manager};
use crate::config::Config;
use crate::errors::Result;
use crate::placement_servers::PlacementServer;

/// A single bar, borrowed from its manager.
pub struct BarRef<'a, C, SERVER> {
    manager: &'a mut Manager<C, SERVER>,
    id: BarId,
}

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    pub fn bar(&mut self, id: BarId) -> Option<BarRef<'_, C, SERVER>> {
        self.state.bar(id)?;
        Some(BarRef { manager: self, id })
    }
}

impl<C: Config, SERVER: PlacementServer> BarRef<'_, C, SERVER> {
    #[must_use]
    pub const fn id(&self) -> BarId {
        self.id
    }

    #[must_use]
    pub fn get(&self) -> &Bar {
        &self.manager.state.bars[self.id.0]
    }

    #[must_use]
    pub fn position(&self) -> Edge {
        self.get().position()
    }

    pub fn set_position(&mut self, edge: Edge) {
        self.manager.apply_position(self.id, edge);
    }

    #[must_use]
    pub fn stretch(&self) -> bool {
        self.get().stretch()
    }

    pub fn set_stretch(&mut self, stretch: bool) {
        self.manager.apply_stretch(self.id, stretch);
    }

    /// Same as [`Manager::remove_bar`].
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` if the manager no longer knows the bar.
    pub fn remove(&mut self) -> Result<()> {
        self.manager.remove_bar(self.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{BarId, BarOptions, Edge, Manager};

    #[test]
    fn a_bar_ref_drives_its_bar() {
        let mut manager = Manager::new_test();
        let id = manager.create_bar(BarOptions::default()).unwrap();
        let mut bar = manager.bar(id).unwrap();
        bar.set_position(Edge::Right);
        bar.set_stretch(false);
        assert_eq!(bar.position(), Edge::Right);
        assert!(!bar.stretch());
        bar.remove().unwrap();
        bar.remove().unwrap();
        assert!(bar.get().is_removed());
        assert!(manager.bar(BarId(5)).is_none());
    }

    #[test]
    fn removing_through_a_bar_ref_restacks_the_siblings() {
        let mut manager = Manager::new_test();
        let first = manager.create_bar(BarOptions::at("top")).unwrap();
        let second = manager.create_bar(BarOptions::at("top")).unwrap();
        assert_eq!(manager.state.compute_margin(second, Edge::Top, true), 24);
        let before = manager.placement_server.requests_for(second);
        manager.bar(first).unwrap().remove().unwrap();
        assert!(!manager.placement_server.is_attached(first));
        assert!(manager.placement_server.requests_for(second) > before);
        let request = manager.placement_server.last_request(second).unwrap();
        assert_eq!(request.margins.top, 0);
    }
}
