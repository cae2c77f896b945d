//! Mandatory-secret enforcement, the fail-fast gate before anything is
//! registered.

use tracing::debug;

use crate::context::{EnvironmentContext, DEPLOYER_KEY_VAR};
use crate::error::{ConfigError, ConfigResult};
use crate::networks::{self, Profile};

/// Which secrets are mandatory in interactive mode, beyond the deployer
/// key (which always is). The two presets are the lenient and strict
/// deployment setups this toolchain has shipped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretPolicy {
    pub require_explorer_key: bool,
    pub require_rpc_urls: bool,
}

impl SecretPolicy {
    /// Deployer key only; RPC endpoints and the explorer key are
    /// opt-in, and networks without an endpoint are skipped.
    pub fn lenient() -> Self {
        Self {
            require_explorer_key: false,
            require_rpc_urls: false,
        }
    }

    /// Deployer key, the explorer key of every enabled network, and
    /// every enabled network's RPC endpoint.
    pub fn strict() -> Self {
        Self {
            require_explorer_key: true,
            require_rpc_urls: true,
        }
    }
}

impl Default for SecretPolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

pub struct SecretValidator;

impl SecretValidator {
    /// Gate resolution on the mandatory secrets. Automated runs skip
    /// every check and signal a local-only profile. The first missing
    /// variable fails the run, before any network exists.
    pub fn validate(
        ctx: &EnvironmentContext,
        policy: &SecretPolicy,
        enabled: &[String],
    ) -> ConfigResult<Profile> {
        if ctx.is_automated() {
            debug!("automated mode, skipping secret checks");
            return Ok(Profile::Automated);
        }

        require(ctx, DEPLOYER_KEY_VAR)?;

        if policy.require_explorer_key {
            for name in enabled {
                if let Some(explorer) = networks::lookup(name).and_then(|spec| spec.explorer) {
                    require(ctx, explorer.key_var)?;
                }
            }
        }

        if policy.require_rpc_urls {
            for name in enabled {
                if let Some(spec) = networks::lookup(name) {
                    require(ctx, spec.rpc_var)?;
                }
            }
        }

        Ok(Profile::Interactive)
    }
}

fn require(ctx: &EnvironmentContext, var: &str) -> ConfigResult<()> {
    match ctx.get(var) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(ConfigError::MissingSecret(var.to_string())),
    }
}
