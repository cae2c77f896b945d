//! Secrets file loading, `KEY=VALUE` lines in the dotenv style.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::context::{DEFAULT_SECRETS_FILE, SECRETS_FILE_VAR};
use crate::error::{ConfigError, ConfigResult};

/// Reader for the local credentials file kept out of source control.
pub struct SecretsFile;

impl SecretsFile {
    /// Secrets file location: the explicit override variable when set,
    /// else the default file in the project root.
    pub fn resolve_path(vars: &BTreeMap<String, String>) -> PathBuf {
        vars.get(SECRETS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_FILE))
    }

    /// Read and parse the secrets file. A missing file yields no pairs;
    /// an unreadable or malformed file aborts startup.
    pub fn read<P: AsRef<Path>>(path: P) -> ConfigResult<Vec<(String, String)>> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no secrets file, using ambient environment");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Self::parse(&content, path)
    }

    /// Parse `KEY=VALUE` lines. Blank lines and `#` comments are
    /// skipped; values keep any embedded `=`.
    pub fn parse(content: &str, path: &Path) -> ConfigResult<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| malformed(path, idx + 1))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(malformed(path, idx + 1));
            }
            pairs.push((key.to_string(), value.trim().to_string()));
        }
        debug!(path = %path.display(), entries = pairs.len(), "loaded secrets file");
        Ok(pairs)
    }
}

fn malformed(path: &Path, line: usize) -> ConfigError {
    ConfigError::MalformedSecretsFile {
        path: path.display().to_string(),
        line,
    }
}
