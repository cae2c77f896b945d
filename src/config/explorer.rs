use serde::{Deserialize, Serialize};

/// Explicit registration of a network's verification endpoints, for
/// chains the verifier does not know natively. Chain ids are globally
/// unique within a resolved set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomChainDescriptor {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}
