//! One-shot configuration resolution, run at startup before any other
//! tool.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::config::explorer::CustomChainDescriptor;
use crate::config::network::NetworkDefinition;
use crate::config::resolved::ResolvedConfig;
use crate::context::{EnvironmentContext, DEPLOYER_KEY_VAR};
use crate::error::{ConfigError, ConfigResult};
use crate::loader::env::EnvironmentLoader;
use crate::loader::validation::{SecretPolicy, SecretValidator};
use crate::networks::{self, Profile, LOCAL_NETWORK};

/// Which networks an interactive run may deploy to, and which secrets
/// are mandatory for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPolicy {
    pub enabled_networks: Vec<String>,
    pub secrets: SecretPolicy,
}

impl ResolutionPolicy {
    /// The shipped default: the four testnets, lenient secrets.
    pub fn testnets() -> Self {
        Self {
            enabled_networks: networks::DEFAULT_ENABLED
                .iter()
                .map(|name| name.to_string())
                .collect(),
            secrets: SecretPolicy::lenient(),
        }
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self::testnets()
    }
}

/// Bootstrap the context from the process environment and the secrets
/// file, then resolve with the default policy. The startup entry point.
pub fn resolve_startup_config() -> ConfigResult<ResolvedConfig> {
    let ctx = EnvironmentLoader::load()?;
    resolve(&ctx, &ResolutionPolicy::default())
}

/// Resolve one immutable configuration from an explicit context.
pub fn resolve(
    ctx: &EnvironmentContext,
    policy: &ResolutionPolicy,
) -> ConfigResult<ResolvedConfig> {
    let profile = SecretValidator::validate(ctx, &policy.secrets, &policy.enabled_networks)?;

    let network_map = build_network_map(ctx, profile, &policy.enabled_networks)?;
    let explorer_keys = build_explorer_keys(ctx, &network_map);
    let custom_chains = build_custom_chains(&explorer_keys);
    check_consistency(&network_map, &explorer_keys, &custom_chains)?;

    debug!(?profile, networks = network_map.len(), "configuration resolved");
    Ok(ResolvedConfig::assemble(
        network_map,
        explorer_keys,
        custom_chains,
    ))
}

/// Build the name to [`NetworkDefinition`] map. The local network is
/// always present. Interactive runs add each allow-listed network whose
/// RPC endpoint is set; everything else stays out of the map entirely.
pub fn build_network_map(
    ctx: &EnvironmentContext,
    profile: Profile,
    enabled: &[String],
) -> ConfigResult<BTreeMap<String, NetworkDefinition>> {
    let mut map = BTreeMap::new();
    map.insert(LOCAL_NETWORK.to_string(), NetworkDefinition::local());

    if profile == Profile::Automated {
        return Ok(map);
    }

    let deployer = ctx
        .deployer_key()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ConfigError::MissingSecret(DEPLOYER_KEY_VAR.to_string()))?;

    for name in enabled {
        let spec = networks::lookup(name).ok_or_else(|| {
            ConfigError::Inconsistency(format!("enabled network '{name}' is not in the catalog"))
        })?;
        match ctx.get(spec.rpc_var).filter(|url| !url.is_empty()) {
            Some(url) => {
                map.insert(spec.name.to_string(), NetworkDefinition::remote(url, deployer));
            }
            None => {
                debug!(network = spec.name, var = spec.rpc_var, "RPC endpoint unset, skipping");
            }
        }
    }

    Ok(map)
}

/// Verification keys for registered remote networks whose explorer key
/// variable is set. Networks in one explorer family share the value.
pub fn build_explorer_keys(
    ctx: &EnvironmentContext,
    network_map: &BTreeMap<String, NetworkDefinition>,
) -> BTreeMap<String, String> {
    let mut keys = BTreeMap::new();
    for name in network_map.keys() {
        // The local network has no catalog entry and no explorer.
        let Some(spec) = networks::lookup(name) else {
            continue;
        };
        if let Some(explorer) = spec.explorer {
            if let Some(key) = ctx.get(explorer.key_var).filter(|key| !key.is_empty()) {
                keys.insert(name.clone(), key.to_string());
            }
        }
    }
    keys
}

/// Descriptors for every credentialed network whose explorer is not
/// natively known to the verifier.
pub fn build_custom_chains(
    explorer_keys: &BTreeMap<String, String>,
) -> Vec<CustomChainDescriptor> {
    let mut chains = Vec::new();
    for name in explorer_keys.keys() {
        let Some(spec) = networks::lookup(name) else {
            continue;
        };
        if let Some(endpoints) = spec.explorer.and_then(|explorer| explorer.endpoints) {
            chains.push(CustomChainDescriptor {
                network: name.clone(),
                chain_id: spec.chain_id,
                api_url: endpoints.api_url.to_string(),
                browser_url: endpoints.browser_url.to_string(),
            });
        }
    }
    chains
}

/// Flag registry/credential/descriptor mismatches before assembly. An
/// orphaned credential, a non-native credential without a descriptor, a
/// descriptor contradicting the catalog, or a duplicate chain id is a
/// configuration defect, not something to ignore.
pub fn check_consistency(
    network_map: &BTreeMap<String, NetworkDefinition>,
    explorer_keys: &BTreeMap<String, String>,
    custom_chains: &[CustomChainDescriptor],
) -> ConfigResult<()> {
    for name in explorer_keys.keys() {
        if !network_map.contains_key(name) {
            return Err(ConfigError::Inconsistency(format!(
                "explorer credential for '{name}' but no such network is registered"
            )));
        }
        let needs_descriptor = networks::lookup(name)
            .and_then(|spec| spec.explorer)
            .is_some_and(|explorer| explorer.endpoints.is_some());
        if needs_descriptor && !custom_chains.iter().any(|chain| chain.network == *name) {
            return Err(ConfigError::Inconsistency(format!(
                "network '{name}' targets a non-native explorer but has no chain descriptor"
            )));
        }
    }

    let mut seen = BTreeSet::new();
    for chain in custom_chains {
        if let Some(spec) = networks::lookup(&chain.network) {
            if spec.chain_id != chain.chain_id {
                return Err(ConfigError::Inconsistency(format!(
                    "chain descriptor for '{}' declares id {} but the catalog says {}",
                    chain.network, chain.chain_id, spec.chain_id
                )));
            }
        }
        if !seen.insert(chain.chain_id) {
            return Err(ConfigError::Inconsistency(format!(
                "duplicate chain id {} in custom chain descriptors",
                chain.chain_id
            )));
        }
    }

    Ok(())
}
