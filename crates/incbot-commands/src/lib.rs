//! # Incbot Commands
//!
//! Discord command implementations using Poise framework for Incbot.
//!
//! This crate provides the `/stats` slash command, the legacy `!stats` text
//! trigger, and the conversion of rendered stats into Discord embeds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod framework;
pub mod legacy;
pub mod reply;
pub mod stats;

pub use framework::*;
pub use legacy::*;
pub use reply::*;
pub use stats::*;
