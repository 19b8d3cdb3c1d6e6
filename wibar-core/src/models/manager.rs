use crate::config::Config;
use crate::placement_servers::PlacementServer;
use crate::state::State;

/// Owns every bar and the placement server they are laid out with.
#[derive(Debug)]
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub placement_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: PlacementServer,
{
    pub fn new(config: C) -> Self {
        let placement_server = SERVER::new(&config);

        Self {
            state: State::default(),
            config,
            placement_server,
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::placement_servers::MockPlacementServer> {
    /// Two 1000x800 screens side by side, with a 16px font.
    pub fn new_test() -> Self {
        use crate::models::{BBox, Screen, ScreenId};
        Self::new(crate::config::TestConfig {
            screens: vec![
                Screen::new(ScreenId(0), BBox::new(0, 0, 1000, 800), "DP-1".into()),
                Screen::new(ScreenId(1), BBox::new(1000, 0, 1000, 800), "DP-2".into()),
            ],
            font_height: 16,
            bar_height: None,
            bar_width: None,
        })
    }
}
