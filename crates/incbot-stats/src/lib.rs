//! # Incbot Stats
//!
//! Stats backend client and reply formatting for the Incbot Discord bot.
//!
//! This crate fetches a user's statistics from the backend, keeps the JSON
//! body as-is, and renders it through a declarative [`Layout`] into a
//! chat-agnostic [`DisplayPayload`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod model;
pub mod service;

pub use client::*;
pub use error::*;
pub use formatter::*;
pub use layout::*;
pub use model::*;
pub use service::*;
