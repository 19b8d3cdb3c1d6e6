//! Bars and the order they were placed in.

use crate::models::{Bar, BarId, Registry, ScreenId};

#[derive(Debug, Default)]
pub struct State {
    /// Every bar ever created, indexed by `BarId`. Removed bars stay here, inert.
    pub bars: Vec<Bar>,
    pub registry: Registry,
}

impl State {
    #[must_use]
    pub fn bar(&self, id: BarId) -> Option<&Bar> {
        self.bars.get(id.0)
    }

    pub fn bar_mut(&mut self, id: BarId) -> Option<&mut Bar> {
        self.bars.get_mut(id.0)
    }

    pub(crate) fn next_bar_id(&self) -> BarId {
        BarId(self.bars.len())
    }

    /// Snapshot of the registered bars on `screen`, in stacking order.
    #[must_use]
    pub fn bars_on_screen(&self, screen: ScreenId) -> Vec<BarId> {
        self.registry
            .iter()
            .filter(|id| self.bar(*id).is_some_and(|b| b.screen == Some(screen)))
            .collect()
    }

    /// Registered bars in stacking order.
    pub fn live_bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.registry.iter().filter_map(|id| self.bar(id))
    }
}
