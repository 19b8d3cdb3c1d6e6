use crate::models::{Align, Axis, Edge, Margins};
use serde::{Deserialize, Serialize};

/// What the placement server is asked to do with a bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    /// Edge of the screen the bar is snapped to.
    pub edge: Edge,
    /// Fill the screen along this axis, minus the margins.
    pub maximize: Option<Axis>,
    /// Position along the edge when not maximized.
    pub align: Align,
    /// Keep the bar in place when its geometry changes, until detached.
    pub attach: bool,
    /// Reserve the bar's footprint in the screen's workarea.
    pub update_workarea: bool,
    pub margins: Margins,
}

impl PlacementRequest {
    /// The request used for every docked bar.
    #[must_use]
    pub fn attached(edge: Edge, stretch: bool, margins: Margins) -> Self {
        Self {
            edge,
            maximize: stretch.then(|| edge.maximize_axis()),
            align: Align::Centered,
            attach: true,
            update_workarea: true,
            margins,
        }
    }

    /// A one-off move that is neither remembered nor reserved.
    #[must_use]
    pub const fn one_shot(edge: Edge, align: Align, margins: Margins) -> Self {
        Self {
            edge,
            maximize: None,
            align,
            attach: false,
            update_workarea: false,
            margins,
        }
    }
}
