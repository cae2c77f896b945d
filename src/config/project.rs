//! Static project settings shared by every profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Solidity compiler version the toolchain pins.
pub const SOLC_VERSION: &str = "0.8.20";

/// Source, cache, and artifact locations, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    pub sources: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl ProjectPaths {
    pub fn standard() -> Self {
        Self {
            sources: PathBuf::from("contracts"),
            cache: PathBuf::from("cache"),
            artifacts: PathBuf::from("artifacts"),
        }
    }
}

/// Test-runner settings. The timeout governs the downstream runner, not
/// resolution itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSettings {
    pub timeout_ms: u64,
}

impl TestSettings {
    pub fn standard() -> Self {
        Self {
            timeout_ms: 100_000_000,
        }
    }
}

/// Gas reporter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasReportSettings {
    pub enabled: bool,
    pub currency: String,
    pub exclude_contracts: Vec<String>,
}

impl GasReportSettings {
    pub fn standard() -> Self {
        Self {
            enabled: true,
            currency: "USD".to_string(),
            exclude_contracts: Vec::new(),
        }
    }
}

/// Type-binding generator output location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSettings {
    pub out_dir: PathBuf,
}

impl BindingSettings {
    pub fn standard() -> Self {
        Self {
            out_dir: PathBuf::from("types"),
        }
    }
}
