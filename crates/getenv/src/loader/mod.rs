//! `.env` profile loader.
//!
//! Responsibilities:
//! - Resolve and read the file for a `Profile`.
//! - Parse `KEY=VALUE` lines, strip quotes, expand `$NAME` references.
//! - Merge entries into an `Environment` under the skip/update policy.
//! - Enforce the `GETENV_DISABLED` gate before touching the filesystem.
//!
//! Does NOT handle:
//! - Multi-line values or nested interpolation.
//! - Watching files for changes.
//!
//! Invariants / Assumptions:
//! - Lines are processed strictly in file order; each entry is committed
//!   before the next line is expanded.
//! - Existing non-empty variables win unless update mode is enabled.
//! - A missing profile file is an empty load, not an error.
//! - The first fatal error stops processing; earlier lines stay applied.

mod builder;
mod error;
mod expand;
mod merge;
mod parse;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use error::LoadError;
pub use expand::expand;
pub use parse::{Entry, parse_line};
