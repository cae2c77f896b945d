//! Immutable snapshot of the variables configuration resolution reads.

use std::collections::BTreeMap;

/// Variable whose presence (with a non-empty value) switches resolution
/// into automated mode.
pub const AUTOMATED_MODE_VAR: &str = "CI";

/// Variable supplying the deployer's private key.
pub const DEPLOYER_KEY_VAR: &str = "PRIVATE_KEY";

/// Variable overriding the secrets file location.
pub const SECRETS_FILE_VAR: &str = "CHAINSMITH_SECRETS_FILE";

/// Default secrets file, relative to the project root.
pub const DEFAULT_SECRETS_FILE: &str = ".env";

/// Write-once snapshot of the environment. Built by
/// [`EnvironmentLoader`](crate::loader::EnvironmentLoader) before any
/// other component runs; no component reads ambient process state
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    automated: bool,
    vars: BTreeMap<String, String>,
}

impl EnvironmentContext {
    pub(crate) fn new(vars: BTreeMap<String, String>) -> Self {
        let automated = vars
            .get(AUTOMATED_MODE_VAR)
            .is_some_and(|value| !value.is_empty());
        Self { automated, vars }
    }

    /// Build a context from explicit pairs, bypassing the process
    /// environment and the secrets file.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub fn deployer_key(&self) -> Option<&str> {
        self.get(DEPLOYER_KEY_VAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automated_mode_requires_non_empty_value() {
        let ctx = EnvironmentContext::from_pairs([(AUTOMATED_MODE_VAR, "true")]);
        assert!(ctx.is_automated());

        let ctx = EnvironmentContext::from_pairs([(AUTOMATED_MODE_VAR, "")]);
        assert!(!ctx.is_automated());

        let ctx = EnvironmentContext::from_pairs([("UNRELATED", "1")]);
        assert!(!ctx.is_automated());
    }

    #[test]
    fn lookups_read_the_snapshot_only() {
        let ctx = EnvironmentContext::from_pairs([(DEPLOYER_KEY_VAR, "0xabc")]);
        assert_eq!(ctx.deployer_key(), Some("0xabc"));
        assert!(ctx.contains(DEPLOYER_KEY_VAR));
        assert_eq!(ctx.get("AMOY_RPC"), None);
    }
}
