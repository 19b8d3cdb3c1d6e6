//! Host side of `wibar`: configuration files and logging.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
pub mod config;
pub mod utils;

pub use config::Config;
