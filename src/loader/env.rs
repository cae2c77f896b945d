//! Environment snapshotting and secrets merging.

use std::collections::BTreeMap;
use std::env;

use crate::context::EnvironmentContext;
use crate::error::ConfigResult;
use crate::loader::secrets::SecretsFile;

/// Builds the immutable [`EnvironmentContext`] the rest of resolution
/// reads.
pub struct EnvironmentLoader;

impl EnvironmentLoader {
    /// Snapshot the process environment and merge the secrets file in.
    pub fn load() -> ConfigResult<EnvironmentContext> {
        Self::load_from_snapshot(env::vars().collect())
    }

    /// Merge the secrets file into an explicit snapshot. Variables
    /// already present in the snapshot win over file entries.
    pub fn load_from_snapshot(
        mut vars: BTreeMap<String, String>,
    ) -> ConfigResult<EnvironmentContext> {
        let path = SecretsFile::resolve_path(&vars);
        for (key, value) in SecretsFile::read(&path)? {
            vars.entry(key).or_insert(value);
        }
        Ok(EnvironmentContext::new(vars))
    }
}
