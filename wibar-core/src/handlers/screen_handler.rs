use crate::config::Config;
use crate::models::{BarId, Manager, ScreenId};
use crate::placement_servers::PlacementServer;

impl<C: Config, SERVER: PlacementServer> Manager<C, SERVER> {
    /// Removes every bar living on `screen`.
    ///
    /// Returns `true` if any bar was removed.
    pub fn screen_removed_handler(&mut self, screen: ScreenId) -> bool {
        let doomed: Vec<BarId> = self
            .state
            .bars
            .iter()
            .filter(|b| b.screen() == Some(screen))
            .map(|b| b.id)
            .collect();
        tracing::info!("{} removed, dropping {} bar(s)", screen, doomed.len());
        for id in &doomed {
            self.retire(*id);
        }
        !doomed.is_empty()
    }

    /// Re-attaches the bars of a screen whose geometry changed.
    pub fn screen_changed_handler(&mut self, screen: ScreenId) -> bool {
        let before = self.state.bars_on_screen(screen);
        self.reattach_screen(screen, None);
        !before.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::bar_event::BarEvent;
    use crate::config::TestConfig;
    use crate::models::{BBox, BarOptions, Manager, Screen, ScreenId};
    use crate::placement_servers::GeometryPlacementServer;

    #[test]
    fn removing_a_screen_removes_only_its_bars() {
        let mut manager = Manager::new_test();
        let x = manager.create_bar(BarOptions::at("top")).unwrap();
        let y = manager.create_bar(BarOptions::at("left")).unwrap();
        let mut z = BarOptions::at("top");
        z.screen = Some(ScreenId(1));
        let z = manager.create_bar(z).unwrap();

        manager.placement_server.remove_screen(ScreenId(0));
        assert!(manager.bar_event_handler(BarEvent::ScreenRemoved(ScreenId(0))));

        for id in [x, y] {
            let bar = manager.state.bar(id).unwrap();
            assert!(!bar.visible());
            assert!(bar.is_removed());
            assert!(!manager.state.registry.contains(id));
            assert!(!manager.placement_server.is_attached(id));
        }
        let bar = manager.state.bar(z).unwrap();
        assert!(bar.visible());
        assert_eq!(bar.screen(), Some(ScreenId(1)));
        assert!(manager.placement_server.is_attached(z));
        assert_eq!(manager.state.registry.iter().collect::<Vec<_>>(), vec![z]);
    }

    #[test]
    fn removing_an_empty_screen_changes_nothing() {
        let mut manager = Manager::new_test();
        manager.create_bar(BarOptions::at("top")).unwrap();
        assert!(!manager.bar_event_handler(BarEvent::ScreenRemoved(ScreenId(1))));
        assert_eq!(manager.state.registry.len(), 1);
    }

    #[test]
    fn screen_changes_reattach_its_bars() {
        let mut manager = Manager::new_test();
        let top = manager.create_bar(BarOptions::at("top")).unwrap();
        let left = manager.create_bar(BarOptions::at("left")).unwrap();
        let before = manager.placement_server.requests.len();
        assert!(manager.bar_event_handler(BarEvent::ScreenChanged(ScreenId(0))));
        assert_eq!(manager.placement_server.requests.len(), before + 2);
        assert!(manager.placement_server.is_attached(top));
        assert!(manager.placement_server.is_attached(left));
    }

    #[test]
    fn resized_screens_get_their_bars_reflowed() {
        let mut manager = Manager::<TestConfig, GeometryPlacementServer>::new(TestConfig {
            screens: vec![Screen::new(
                ScreenId(0),
                BBox::new(0, 0, 1000, 800),
                "DP-1".into(),
            )],
            font_height: 16,
            bar_height: None,
            bar_width: None,
        });
        let top = manager.create_bar(BarOptions::at("top")).unwrap();
        let left = manager.create_bar(BarOptions::at("left")).unwrap();
        let server = &manager.placement_server;
        assert_eq!(server.geometry(top), Some(BBox::new(0, 0, 1000, 24)));
        assert_eq!(server.geometry(left), Some(BBox::new(0, 24, 24, 776)));
        assert_eq!(server.workarea(ScreenId(0)), Some(BBox::new(24, 24, 976, 776)));

        manager
            .placement_server
            .set_screen_geometry(ScreenId(0), BBox::new(0, 0, 1200, 900));
        assert!(manager.bar_event_handler(BarEvent::ScreenChanged(ScreenId(0))));

        let server = &manager.placement_server;
        assert_eq!(server.geometry(top), Some(BBox::new(0, 0, 1200, 24)));
        assert_eq!(server.geometry(left), Some(BBox::new(0, 24, 24, 876)));
        assert_eq!(server.workarea(ScreenId(0)), Some(BBox::new(24, 24, 1176, 876)));
    }
}
