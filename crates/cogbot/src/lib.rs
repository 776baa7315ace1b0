//! # Cogbot
//!
//! Discord bot bootstrap: loads toggleable cogs from a directory tree and
//! rotates the bot's presence from a status list.
//!
//! This is the main binary crate that orchestrates the application lifecycle
//! using the Poise framework for Discord interactions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod presence;
pub mod rotator;

pub use bot::*;
pub use error::*;
pub use presence::*;
pub use rotator::*;
