//! Docks bars against the edges of screens and keeps them from overlapping.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod bar_event;
pub mod config;
pub mod deprecated;
pub mod errors;
mod handlers;
pub mod models;
mod placement_request;
pub mod placement_servers;
pub mod state;

pub use bar_event::BarEvent;
pub use config::Config;
pub use errors::{Result, WibarError};
pub use models::{BarOptions, BarRef, Edge, Manager};
pub use placement_request::PlacementRequest;
pub use placement_servers::{DetachHandle, GeometryPlacementServer, PlacementServer};
pub use state::State;
