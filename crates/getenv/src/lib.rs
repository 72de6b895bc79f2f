//! Profile-aware `.env` loading for process startup.
//!
//! This crate reads a `KEY=VALUE` file for the selected [`Profile`] from the
//! current working directory and merges it into the process environment.
//! Existing non-empty variables win unless the loader runs in update mode.
//!
//! ```no_run
//! use getenv::EnvLoader;
//!
//! # fn main() -> Result<(), getenv::LoadError> {
//! EnvLoader::new().load_default()?;
//! EnvLoader::new().with_update(true).load_production()?;
//! # Ok(())
//! # }
//! ```
//!
//! Loading mutates process-global state. Finish it before spawning threads
//! that read the environment.

pub mod constants;
pub mod environment;
mod loader;
pub mod profile;

pub use environment::{Environment, MapEnv, ProcessEnv};
pub use loader::{EnvLoader, Entry, LoadError, expand, parse_line};
pub use profile::Profile;
