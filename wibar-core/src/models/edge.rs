use crate::errors::WibarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The side of a screen a bar is docked against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis along which a stretched bar is maximized.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Where a bar that does not fill its edge sits along that edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Centered,
    End,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Top and bottom bars span the width of the screen.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// Whether moving from `self` to `other` swaps which dimension faces the
    /// screen edge (e.g. top to left).
    #[must_use]
    pub const fn changes_class(self, other: Edge) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    #[must_use]
    pub const fn maximize_axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Horizontal,
            Edge::Left | Edge::Right => Axis::Vertical,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Edge {
    type Err = WibarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            _ => Err(WibarError::InvalidPosition(s.to_owned())),
        }
    }
}

impl FromStr for Align {
    type Err = WibarError;

    // Accepts the edge-flavoured names older configs used as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" | "left" | "top" => Ok(Align::Start),
            "centered" | "center" | "middle" => Ok(Align::Centered),
            "end" | "right" | "bottom" => Ok(Align::End),
            _ => Err(WibarError::InvalidPosition(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_parses_from_its_name() {
        for edge in Edge::ALL {
            assert_eq!(edge.as_str().parse::<Edge>(), Ok(edge));
        }
    }

    #[test]
    fn unknown_edge_names_are_rejected() {
        assert_eq!(
            "middle".parse::<Edge>(),
            Err(WibarError::InvalidPosition("middle".to_string()))
        );
        assert!("Top".parse::<Edge>().is_err());
    }

    #[test]
    fn stretched_bars_maximize_across_their_edge() {
        assert_eq!(Edge::Top.maximize_axis(), Axis::Horizontal);
        assert_eq!(Edge::Bottom.maximize_axis(), Axis::Horizontal);
        assert_eq!(Edge::Left.maximize_axis(), Axis::Vertical);
        assert_eq!(Edge::Right.maximize_axis(), Axis::Vertical);
    }

    #[test]
    fn class_changes_only_between_perpendicular_edges() {
        assert!(Edge::Top.changes_class(Edge::Left));
        assert!(Edge::Right.changes_class(Edge::Bottom));
        assert!(!Edge::Top.changes_class(Edge::Bottom));
        assert!(!Edge::Left.changes_class(Edge::Right));
    }
}
