//! # Incbot
//!
//! Discord bot that looks up Incbot user statistics and replies with an embed.
//!
//! This is the main binary crate that wires configuration, logging, the stats
//! client, and the Poise framework together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod logging;

pub use bot::*;
pub use error::*;
pub use logging::*;
