use serde::{Deserialize, Serialize};

/// One entry in the resolved network map, as consumed by the deployer
/// and the test harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    /// RPC endpoint. `None` only for the local ephemeral network.
    pub rpc_url: Option<String>,

    /// Deployer accounts. Exactly one entry for remote networks, empty
    /// for the local network.
    pub accounts: Vec<String>,

    /// Whether contracts may exceed the EIP-170 size limit.
    pub allow_unlimited_contract_size: bool,
}

impl NetworkDefinition {
    /// The in-process ephemeral network: no RPC, no accounts, size
    /// limit enforced.
    pub fn local() -> Self {
        Self {
            rpc_url: None,
            accounts: Vec::new(),
            allow_unlimited_contract_size: false,
        }
    }

    pub fn remote(rpc_url: impl Into<String>, deployer_key: impl Into<String>) -> Self {
        Self {
            rpc_url: Some(rpc_url.into()),
            accounts: vec![deployer_key.into()],
            allow_unlimited_contract_size: false,
        }
    }

    pub fn is_local(&self) -> bool {
        self.rpc_url.is_none()
    }
}
