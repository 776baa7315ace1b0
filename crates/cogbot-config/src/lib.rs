//! # Cogbot Config
//!
//! Configuration management for Cogbot.
//!
//! This crate owns every file the bot reads or writes outside of the cogs
//! themselves: the runtime configuration, the token file, the per-cog
//! `options.json` toggles and the status list.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod options;
pub mod schema;
pub mod status_list;
pub mod token;

pub use defaults::*;
pub use loader::*;
pub use options::*;
pub use schema::*;
pub use status_list::*;
pub use token::*;
