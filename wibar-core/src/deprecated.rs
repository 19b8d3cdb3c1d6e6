//! Free functions kept for hosts written before bars had their own
//! accessors. Each logs a deprecation notice and forwards to `Manager`.
#![allow(deprecated)]

use crate::config::Config;
use crate::errors::Result;
use crate::models::{Align, BarId, Edge, Manager};
use crate::placement_servers::PlacementServer;

fn deprecate(old: &str, new: &str) {
    tracing::warn!("`wibar::{}` is deprecated, use `{}` instead", old, new);
}

/// # Errors
///
/// See [`Manager::position`].
#[deprecated(since = "0.1.0", note = "use `Manager::position`")]
pub fn get_position<C: Config, SERVER: PlacementServer>(
    manager: &Manager<C, SERVER>,
    bar: BarId,
) -> Result<Edge> {
    deprecate("get_position", "Manager::position");
    manager.position(bar)
}

/// # Errors
///
/// Fails on unknown positions and bars, see [`Manager::set_position`].
#[deprecated(since = "0.1.0", note = "use `Manager::set_position`")]
pub fn set_position<C: Config, SERVER: PlacementServer>(
    manager: &mut Manager<C, SERVER>,
    bar: BarId,
    position: &str,
) -> Result<()> {
    deprecate("set_position", "Manager::set_position");
    let edge = position.parse()?;
    manager.set_position(bar, edge)
}

/// # Errors
///
/// Fails on unknown positions and bars, see [`Manager::set_position`].
#[deprecated(since = "0.1.0", note = "use `Manager::set_position`")]
pub fn attach<C: Config, SERVER: PlacementServer>(
    manager: &mut Manager<C, SERVER>,
    bar: BarId,
    position: &str,
) -> Result<()> {
    deprecate("attach", "Manager::set_position");
    let edge = position.parse()?;
    manager.set_position(bar, edge)
}

/// # Errors
///
/// See [`Manager::stretch`].
#[deprecated(since = "0.1.0", note = "use `Manager::stretch`")]
pub fn stretch<C: Config, SERVER: PlacementServer>(
    manager: &Manager<C, SERVER>,
    bar: BarId,
) -> Result<bool> {
    deprecate("stretch", "Manager::stretch");
    manager.stretch(bar)
}

/// # Errors
///
/// See [`Manager::set_stretch`].
#[deprecated(since = "0.1.0", note = "use `Manager::set_stretch`")]
pub fn set_stretch<C: Config, SERVER: PlacementServer>(
    manager: &mut Manager<C, SERVER>,
    bar: BarId,
    stretch: bool,
) -> Result<()> {
    deprecate("set_stretch", "Manager::set_stretch");
    manager.set_stretch(bar, stretch)
}

/// # Errors
///
/// Fails on unknown alignments and bars, see [`Manager::place_once`].
#[deprecated(since = "0.1.0", note = "use `Manager::place_once`")]
pub fn align<C: Config, SERVER: PlacementServer>(
    manager: &mut Manager<C, SERVER>,
    bar: BarId,
    align: &str,
) -> Result<()> {
    deprecate("align", "Manager::place_once");
    let align: Align = align.parse()?;
    manager.place_once(bar, align)
}
