//! Environment variable tables the loader reads from and writes to.
//!
//! Responsibilities:
//! - Define the `Environment` capability (get / set a string variable).
//! - Provide `ProcessEnv`, backed by the real process table.
//! - Provide `MapEnv`, an in-memory table for tests and dry runs.
//!
//! Does NOT handle:
//! - Merge precedence (see `loader::merge`).
//!
//! Invariants:
//! - `set_var` never panics; invalid names or values surface as
//!   `LoadError::EnvironmentWrite`.

use std::collections::HashMap;

use crate::loader::LoadError;

/// A mutable mapping from variable name to string value.
pub trait Environment {
    /// Current value of `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::EnvironmentWrite` if the table rejects the pair.
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), LoadError>;
}

/// Check a name/value pair against the rules of the platform table.
///
/// `std::env::set_var` panics on these inputs, so they are rejected up front.
fn validate(key: &str, value: &str) -> Result<(), LoadError> {
    let reason = if key.is_empty() {
        "variable name is empty"
    } else if key.contains('=') {
        "variable name contains '='"
    } else if key.contains('\0') {
        "variable name contains a NUL byte"
    } else if value.contains('\0') {
        "value contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(LoadError::EnvironmentWrite {
        key: key.to_string(),
        reason,
    })
}

/// The real process environment.
///
/// Writing is not synchronized with other threads. Callers must complete
/// loading before any other thread reads or writes environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values still count as present.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), LoadError> {
        validate(key, value)?;
        // SAFETY: the loader runs during single-threaded startup; concurrent
        // environment access is documented as the caller's responsibility.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// In-memory environment table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the table has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Consume the table and return the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.vars
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), LoadError> {
        validate(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
