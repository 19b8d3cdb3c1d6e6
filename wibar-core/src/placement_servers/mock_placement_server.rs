use super::{Config, DetachHandle, PlacementServer};
use crate::models::{BBox, Bar, BarId, Screen, ScreenId};
use crate::placement_request::PlacementRequest;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MockPlacementServer {
    pub screens: Vec<Screen>,
    pub font_height: u32,
    pub requests: Vec<(BarId, PlacementRequest)>,
    pub detached: Vec<u64>,
    pub attached: HashMap<u64, BarId>,
    next_handle: u64,
}

impl MockPlacementServer {
    pub fn last_request(&self, bar: BarId) -> Option<&PlacementRequest> {
        self.requests
            .iter()
            .rev()
            .find(|(b, _)| *b == bar)
            .map(|(_, request)| request)
    }

    pub fn requests_for(&self, bar: BarId) -> usize {
        self.requests.iter().filter(|(b, _)| *b == bar).count()
    }

    pub fn is_attached(&self, bar: BarId) -> bool {
        self.attached.values().any(|b| *b == bar)
    }

    pub fn remove_screen(&mut self, screen: ScreenId) {
        self.screens.retain(|s| s.id != screen);
    }
}

impl PlacementServer for MockPlacementServer {
    fn new(config: &impl Config) -> Self {
        Self {
            screens: config.screens(),
            font_height: config.font_height(),
            ..Self::default()
        }
    }

    fn place(&mut self, bar: &Bar, request: &PlacementRequest) -> Option<DetachHandle> {
        self.requests.push((bar.id, *request));
        if !request.attach {
            return None;
        }
        self.next_handle += 1;
        self.attached.insert(self.next_handle, bar.id);
        Some(DetachHandle::new(self.next_handle))
    }

    fn detach(&mut self, handle: DetachHandle) {
        assert!(
            self.attached.remove(&handle.id()).is_some(),
            "handle {} detached twice",
            handle.id()
        );
        self.detached.push(handle.id());
    }

    fn screen_geometry(&self, screen: ScreenId) -> Option<BBox> {
        self.screens.iter().find(|s| s.id == screen).map(|s| s.bbox)
    }

    fn primary_screen(&self) -> Option<ScreenId> {
        self.screens.first().map(|s| s.id)
    }

    fn font_height(&self, _font: Option<&str>) -> u32 {
        self.font_height
    }
}
