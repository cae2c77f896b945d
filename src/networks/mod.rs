//! Declarative catalog of deploy targets and the profiles that select
//! from it. A network a profile does not enable is simply absent from
//! its allow-list, never a dead entry.

use serde::{Deserialize, Serialize};

use crate::context::EnvironmentContext;

/// Resolution profile. Automated runs build only the local network and
/// skip every secret check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Interactive,
    Automated,
}

impl Profile {
    pub fn detect(ctx: &EnvironmentContext) -> Self {
        if ctx.is_automated() {
            Profile::Automated
        } else {
            Profile::Interactive
        }
    }
}

/// Name of the in-process ephemeral network used by the test runner.
pub const LOCAL_NETWORK: &str = "local";

/// Etherscan-family API key variable shared by every catalog entry.
pub const EXPLORER_KEY_VAR: &str = "ETHERSCAN_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Testnet,
    Mainnet,
}

/// A deployable network the toolchain knows about. `name` is the join
/// key across the network map, explorer keys, and chain descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSpec {
    pub name: &'static str,
    /// Environment variable supplying the RPC endpoint.
    pub rpc_var: &'static str,
    pub chain_id: u64,
    pub kind: NetworkKind,
    /// Verification wiring, when the network's explorer is supported.
    pub explorer: Option<ExplorerSpec>,
}

/// How deployed contracts on a network get verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerSpec {
    /// Variable supplying the API key. Networks in one explorer family
    /// share the variable, and so the key value.
    pub key_var: &'static str,
    /// Endpoints for explorers the verifier does not know natively.
    /// `None` means the chain is built in and needs no descriptor.
    pub endpoints: Option<ExplorerEndpoints>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerEndpoints {
    pub api_url: &'static str,
    pub browser_url: &'static str,
}

/// Every network the toolchain can target. Mainnets stay in the catalog
/// even while no profile enables them.
pub const CATALOG: &[NetworkSpec] = &[
    NetworkSpec {
        name: "amoy",
        rpc_var: "AMOY_RPC",
        chain_id: 80_002,
        kind: NetworkKind::Testnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: Some(ExplorerEndpoints {
                api_url: "https://api-amoy.polygonscan.com/api",
                browser_url: "https://amoy.polygonscan.com",
            }),
        }),
    },
    NetworkSpec {
        name: "bsc_testnet",
        rpc_var: "BSC_TESTNET_RPC",
        chain_id: 97,
        kind: NetworkKind::Testnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: Some(ExplorerEndpoints {
                api_url: "https://api.bscscan.com/api",
                browser_url: "https://bscscan.com",
            }),
        }),
    },
    NetworkSpec {
        name: "base_sepolia",
        rpc_var: "BASE_SEPOLIA_RPC",
        chain_id: 84_532,
        kind: NetworkKind::Testnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: None,
        }),
    },
    NetworkSpec {
        name: "eth_sepolia",
        rpc_var: "ETH_SEPOLIA_RPC",
        chain_id: 11_155_111,
        kind: NetworkKind::Testnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: None,
        }),
    },
    NetworkSpec {
        name: "polygon",
        rpc_var: "POLYGON_RPC_URL",
        chain_id: 137,
        kind: NetworkKind::Mainnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: Some(ExplorerEndpoints {
                api_url: "https://api.polygonscan.com/api",
                browser_url: "https://polygonscan.com",
            }),
        }),
    },
    NetworkSpec {
        name: "bsc",
        rpc_var: "BSC_RPC",
        chain_id: 56,
        kind: NetworkKind::Mainnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: None,
        }),
    },
    NetworkSpec {
        name: "base",
        rpc_var: "BASE_RPC",
        chain_id: 8_453,
        kind: NetworkKind::Mainnet,
        explorer: Some(ExplorerSpec {
            key_var: EXPLORER_KEY_VAR,
            endpoints: Some(ExplorerEndpoints {
                api_url: "https://api.basescan.org/api",
                browser_url: "https://basescan.com",
            }),
        }),
    },
];

/// Allow-list of networks an interactive run may deploy to.
pub const DEFAULT_ENABLED: &[&str] = &["amoy", "bsc_testnet", "base_sepolia", "eth_sepolia"];

pub fn lookup(name: &str) -> Option<&'static NetworkSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}
