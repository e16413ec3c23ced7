#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod ocean;
#[cfg(feature = "std")]
mod player_cli;
mod ship;

pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ocean::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
