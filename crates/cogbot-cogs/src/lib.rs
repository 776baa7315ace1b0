//! # Cogbot Cogs
//!
//! Cog registry, directory scanner and built-in cogs for Cogbot.
//!
//! Cogs are compiled in and registered by name. At startup the scanner walks
//! the cogs directory, consults each folder's `options.json` and loads the
//! matching cog into a [`CogHost`], which collects the Poise commands the
//! framework is later built with.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod about;
pub mod framework;
pub mod registry;
pub mod scanner;
pub mod uptime;

pub use framework::*;
pub use registry::*;
pub use scanner::*;
