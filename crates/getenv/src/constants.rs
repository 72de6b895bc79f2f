//! Centralized constants for the getenv crate.
//!
//! File names and variable names shared between the loader, profiles,
//! and tests live here to avoid string duplication.

// =============================================================================
// Profile File Names
// =============================================================================

/// File read by [`crate::Profile::Default`].
pub const DEFAULT_FILE_NAME: &str = ".env";

/// File read by [`crate::Profile::Development`].
pub const DEVELOPMENT_FILE_NAME: &str = ".env.development";

/// File read by [`crate::Profile::Production`].
pub const PRODUCTION_FILE_NAME: &str = ".env.production";

// =============================================================================
// Loader Gates
// =============================================================================

/// When set to `1` or `true` in the target environment, every load is a no-op.
pub const DISABLE_VAR: &str = "GETENV_DISABLED";

// =============================================================================
// File Syntax
// =============================================================================

/// Lines starting with this prefix are comments.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Characters stripped from both ends of a value.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];
