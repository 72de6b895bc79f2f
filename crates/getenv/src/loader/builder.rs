//! `EnvLoader` builder and load routine.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` carrying the update flag and an
//!   optional base directory.
//! - Resolve the profile file path and read it.
//! - Drive parse → expand → merge for every line in file order.
//!
//! Does NOT handle:
//! - Line syntax (delegated to parse.rs).
//! - Reference syntax (delegated to expand.rs).
//! - Merge precedence decisions (delegated to merge.rs).
//!
//! Invariants / Assumptions:
//! - The `GETENV_DISABLED` variable is checked before any file is read.
//! - A missing file is an empty load.
//! - Processing stops at the first fatal error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::LoadError;
use super::expand::expand;
use super::merge::{MergeOutcome, merge_entry};
use super::parse::parse_line;
use crate::constants::DISABLE_VAR;
use crate::environment::{Environment, ProcessEnv};
use crate::profile::Profile;

/// Loads profile files into an environment.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    update: bool,
    dir: Option<PathBuf>,
}

#[derive(Debug, Default)]
struct LoadSummary {
    set: usize,
    updated: usize,
    skipped: usize,
}

impl EnvLoader {
    /// Create a loader where existing non-empty variables always win.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite existing variables whose value differs from the file.
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Resolve profile files against `dir` instead of the working directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn update(&self) -> bool {
        self.update
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Load `.env` into the process environment.
    pub fn load_default(&self) -> Result<(), LoadError> {
        self.load_profile(Profile::Default)
    }

    /// Load `.env.development` into the process environment.
    pub fn load_development(&self) -> Result<(), LoadError> {
        self.load_profile(Profile::Development)
    }

    /// Load `.env.production` into the process environment.
    pub fn load_production(&self) -> Result<(), LoadError> {
        self.load_profile(Profile::Production)
    }

    /// Load the file for `profile` into the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory cannot be determined (`LoadError::WorkingDirectory`)
    /// - The file exists but cannot be read (`LoadError::FileRead`)
    /// - A line is not `KEY=VALUE` (`LoadError::MalformedLine`)
    /// - A variable cannot be set (`LoadError::EnvironmentWrite`)
    ///
    /// Missing files are silently ignored (returns `Ok(())`).
    pub fn load_profile(&self, profile: Profile) -> Result<(), LoadError> {
        self.load_profile_into(profile, &mut ProcessEnv)
    }

    /// Load the file for `profile` into `env`.
    pub fn load_profile_into<E: Environment>(
        &self,
        profile: Profile,
        env: &mut E,
    ) -> Result<(), LoadError> {
        if Self::disabled(env) {
            debug!(%profile, "Env file loading disabled via {}", DISABLE_VAR);
            return Ok(());
        }

        let path = self.resolve_path(profile)?;
        let Some(content) = Self::read_file(&path)? else {
            debug!(path = %path.display(), "Env file not found, nothing to load");
            return Ok(());
        };

        self.apply_str(&content, &path, env)
    }

    /// Parse `content` and merge every entry into `env` in file order.
    ///
    /// `path` is only used for error context and log fields.
    pub fn apply_str<E: Environment>(
        &self,
        content: &str,
        path: &Path,
        env: &mut E,
    ) -> Result<(), LoadError> {
        let mut summary = LoadSummary::default();

        for (index, text) in content.lines().enumerate() {
            let Some(entry) = parse_line(text, index + 1, path)? else {
                continue;
            };

            let value = expand(&entry.value, |name| env.var(name));
            match merge_entry(env, &entry.key, &value, self.update)? {
                MergeOutcome::Set => summary.set += 1,
                MergeOutcome::Updated => summary.updated += 1,
                MergeOutcome::Skipped => summary.skipped += 1,
            }
        }

        debug!(
            path = %path.display(),
            set = summary.set,
            updated = summary.updated,
            skipped = summary.skipped,
            "Env file loaded"
        );
        Ok(())
    }

    /// Check if loading is disabled in the target environment.
    fn disabled<E: Environment>(env: &E) -> bool {
        matches!(env.var(DISABLE_VAR).as_deref(), Some("true") | Some("1"))
    }

    fn resolve_path(&self, profile: Profile) -> Result<PathBuf, LoadError> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(LoadError::WorkingDirectory)?,
        };
        Ok(dir.join(profile.file_name()))
    }

    /// Read the whole file, mapping `NotFound` to `None`.
    fn read_file(path: &Path) -> Result<Option<String>, LoadError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LoadError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
