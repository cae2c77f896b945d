use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::explorer::CustomChainDescriptor;
use crate::config::network::NetworkDefinition;
use crate::config::project::{
    BindingSettings, GasReportSettings, ProjectPaths, TestSettings, SOLC_VERSION,
};
use crate::error::ConfigResult;
use crate::networks::LOCAL_NETWORK;

/// The one configuration value the toolchain runs on. Built once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub default_network: String,
    pub solc_version: String,
    pub networks: BTreeMap<String, NetworkDefinition>,
    pub explorer_keys: BTreeMap<String, String>,
    pub custom_chains: Vec<CustomChainDescriptor>,
    pub paths: ProjectPaths,
    pub bindings: BindingSettings,
    pub test: TestSettings,
    pub gas_report: GasReportSettings,
}

impl ResolvedConfig {
    /// Pure merge of the builder outputs with the static project
    /// settings. Validation happens before this point.
    pub fn assemble(
        networks: BTreeMap<String, NetworkDefinition>,
        explorer_keys: BTreeMap<String, String>,
        custom_chains: Vec<CustomChainDescriptor>,
    ) -> Self {
        Self {
            default_network: LOCAL_NETWORK.to_string(),
            solc_version: SOLC_VERSION.to_string(),
            networks,
            explorer_keys,
            custom_chains,
            paths: ProjectPaths::standard(),
            bindings: BindingSettings::standard(),
            test: TestSettings::standard(),
            gas_report: GasReportSettings::standard(),
        }
    }

    pub fn network(&self, name: &str) -> Option<&NetworkDefinition> {
        self.networks.get(name)
    }

    /// Render as pretty JSON for downstream tools and debug dumps.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
