use crate::config::Config;
use crate::errors::{Result, WibarError};
use crate::models::{Align, BarId, Manager};
use crate::placement_request::PlacementRequest;
use crate::placement_servers::PlacementServer;

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    /// Docks the bar against its edge with fresh margins. Any previous
    /// attachment is released first.
    pub(crate) fn attach(&mut self, id: BarId) {
        self.detach(id);
        let Some(bar) = self.state.bar(id).filter(|b| !b.is_removed()) else {
            return;
        };
        let margins = self.state.compute_margins(id);
        let request = PlacementRequest::attached(bar.position(), bar.stretch(), margins);
        tracing::debug!("Attaching {} to {} with {:?}", id, request.edge, margins);
        let handle = self.placement_server.place(bar, &request);
        if let Some(bar) = self.state.bar_mut(id) {
            bar.detach_handle = handle;
        }
    }

    /// Releases the bar's attachment. Returns `false` if it had none.
    pub(crate) fn detach(&mut self, id: BarId) -> bool {
        let Some(handle) = self.state.bar_mut(id).and_then(|b| b.detach_handle.take()) else {
            return false;
        };
        tracing::trace!("Detaching {}", id);
        self.placement_server.detach(handle);
        true
    }

    /// Moves the bar once along its edge without attaching it. The bar
    /// keeps any attachment it already has.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownBar` for ids this manager never issued.
    pub fn place_once(&mut self, id: BarId, align: Align) -> Result<()> {
        let bar = self.state.bar(id).ok_or(WibarError::UnknownBar(id))?;
        if bar.is_removed() {
            return Ok(());
        }
        let margins = self.state.compute_margins(id);
        let request = PlacementRequest::one_shot(bar.position(), align, margins);
        if let Some(handle) = self.placement_server.place(bar, &request) {
            self.placement_server.detach(handle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Align, Axis, BarOptions, Edge, Manager};

    #[test]
    fn stretched_bars_are_maximized_across_their_edge() {
        let mut manager = Manager::new_test();
        let top = manager.create_bar(BarOptions::at("top")).unwrap();
        let left = manager.create_bar(BarOptions::at("left")).unwrap();
        let server = &manager.placement_server;
        let request = server.last_request(top).unwrap();
        assert_eq!(request.maximize, Some(Axis::Horizontal));
        assert!(request.attach && request.update_workarea);
        assert_eq!(
            server.last_request(left).unwrap().maximize,
            Some(Axis::Vertical)
        );
    }

    #[test]
    fn reattaching_releases_the_previous_attachment_first() {
        let mut manager = Manager::new_test();
        let bar = manager.create_bar(BarOptions::at("top")).unwrap();
        manager.attach(bar);
        manager.attach(bar);
        assert_eq!(manager.placement_server.attached.len(), 1);
        assert_eq!(manager.placement_server.detached.len(), 2);
    }

    #[test]
    fn detaching_twice_is_a_no_op() {
        let mut manager = Manager::new_test();
        let bar = manager.create_bar(BarOptions::at("top")).unwrap();
        assert!(manager.detach(bar));
        assert!(!manager.detach(bar));
        assert!(!manager.placement_server.is_attached(bar));
    }

    #[test]
    fn one_shot_placement_keeps_the_attachment() {
        let mut manager = Manager::new_test();
        let bar = manager.create_bar(BarOptions::at("bottom")).unwrap();
        manager.place_once(bar, Align::End).unwrap();
        let request = manager.placement_server.last_request(bar).unwrap();
        assert_eq!(request.edge, Edge::Bottom);
        assert_eq!(request.align, Align::End);
        assert!(!request.attach);
        assert!(manager.placement_server.is_attached(bar));
    }
}
