use super::{Edge, ScreenId};
use crate::placement_servers::DetachHandle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BarId(pub usize);

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bar {}", self.0)
    }
}

/// A bar docked against one edge of a screen.
#[derive(Debug)]
pub struct Bar {
    pub id: BarId,
    pub(crate) edge: Option<Edge>,
    pub(crate) stretch: bool,
    pub(crate) screen: Option<ScreenId>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) visible: bool,
    pub font: Option<String>,
    pub properties: HashMap<String, String>,
    pub(crate) detach_handle: Option<DetachHandle>,
}

impl Bar {
    pub(crate) fn new(id: BarId, screen: ScreenId) -> Self {
        Self {
            id,
            edge: None,
            stretch: true,
            screen: Some(screen),
            width: 0,
            height: 0,
            visible: true,
            font: None,
            properties: HashMap::new(),
            detach_handle: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Edge {
        self.edge.unwrap_or_default()
    }

    #[must_use]
    pub const fn stretch(&self) -> bool {
        self.stretch
    }

    #[must_use]
    pub const fn screen(&self) -> Option<ScreenId> {
        self.screen
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.detach_handle.is_some()
    }

    /// A bar without a screen has been removed and no longer takes part in layout.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.screen.is_none()
    }

    /// How much room the bar takes away from the screen along `edge`.
    #[must_use]
    pub const fn extent(&self, edge: Edge) -> u32 {
        if edge.is_horizontal() {
            self.height
        } else {
            self.width
        }
    }

    /// Whether this bar reserves space on `edge` of `screen`.
    #[must_use]
    pub fn occupies(&self, edge: Edge, screen: ScreenId) -> bool {
        self.visible && self.edge == Some(edge) && self.screen == Some(screen)
    }
}
