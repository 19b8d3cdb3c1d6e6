//! Objects (such as bars and screens) used to lay out `wibar`s.
mod bar;
mod bar_options;
mod bar_ref;
mod edge;
mod manager;
mod margins;
mod registry;
mod screen;
mod size;

pub use bar::{Bar, BarId};
pub use bar_options::BarOptions;
pub use bar_ref::BarRef;
pub use edge::{Align, Axis, Edge};
pub use manager::Manager;
pub use margins::Margins;
pub use registry::Registry;
pub use screen::{BBox, Screen, ScreenId};
pub use size::Size;
