//! Merge policy for parsed entries.
//!
//! Responsibilities:
//! - Decide whether an entry is set, overwrites, or is skipped.
//! - Emit the skip/change notices through `tracing`.
//!
//! Invariants:
//! - A variable that is absent or empty is always set.
//! - A non-empty variable is only overwritten in update mode, and only when
//!   the value differs.

use tracing::{debug, info};

use super::error::LoadError;
use crate::environment::Environment;

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MergeOutcome {
    Set,
    Updated,
    Skipped,
}

/// Commit `key=value` into `env` under the skip/update policy.
pub(super) fn merge_entry<E: Environment>(
    env: &mut E,
    key: &str,
    value: &str,
    update: bool,
) -> Result<MergeOutcome, LoadError> {
    match env.var(key) {
        Some(current) if !current.is_empty() => {
            if update && current != value {
                info!(
                    key,
                    old = %current,
                    new = %value,
                    "Environment variable for {} is changed from {} to {}",
                    key,
                    current,
                    value
                );
                env.set_var(key, value)?;
                Ok(MergeOutcome::Updated)
            } else {
                info!(
                    key,
                    current = %current,
                    "Environment variable {} already set to {}, skipping",
                    key,
                    current
                );
                Ok(MergeOutcome::Skipped)
            }
        }
        _ => {
            env.set_var(key, value)?;
            debug!(key, "Environment variable set");
            Ok(MergeOutcome::Set)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnv;

    #[test]
    fn test_absent_variable_is_set() {
        let mut env = MapEnv::new();
        let outcome = merge_entry(&mut env, "PORT", "8080", false).unwrap();
        assert_eq!(outcome, MergeOutcome::Set);
        assert_eq!(env.get("PORT"), Some("8080"));
    }

    #[test]
    fn test_empty_variable_is_overwritten_without_update() {
        let mut env: MapEnv = [("PORT", "")].into_iter().collect();
        let outcome = merge_entry(&mut env, "PORT", "8080", false).unwrap();
        assert_eq!(outcome, MergeOutcome::Set);
        assert_eq!(env.get("PORT"), Some("8080"));
    }

    #[test]
    fn test_existing_variable_wins_without_update() {
        let mut env: MapEnv = [("PORT", "3000")].into_iter().collect();
        let outcome = merge_entry(&mut env, "PORT", "8080", false).unwrap();
        assert_eq!(outcome, MergeOutcome::Skipped);
        assert_eq!(env.get("PORT"), Some("3000"));
    }

    #[test]
    fn test_update_overwrites_differing_value() {
        let mut env: MapEnv = [("PORT", "3000")].into_iter().collect();
        let outcome = merge_entry(&mut env, "PORT", "8080", true).unwrap();
        assert_eq!(outcome, MergeOutcome::Updated);
        assert_eq!(env.get("PORT"), Some("8080"));
    }

    #[test]
    fn test_update_skips_equal_value() {
        let mut env: MapEnv = [("PORT", "8080")].into_iter().collect();
        let outcome = merge_entry(&mut env, "PORT", "8080", true).unwrap();
        assert_eq!(outcome, MergeOutcome::Skipped);
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut env = MapEnv::new();
        let result = merge_entry(&mut env, "BAD\0KEY", "x", false);
        assert!(matches!(result, Err(LoadError::EnvironmentWrite { .. })));
    }
}
