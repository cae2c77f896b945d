//! Chainsmith configuration resolution.
//!
//! Resolves, once at process startup, the deployment configuration for
//! the Chainsmith contract toolchain: which networks are reachable,
//! which account deploys, how deployed contracts get verified, and the
//! static build settings every downstream tool shares. Resolution is
//! synchronous, performs no network I/O, and reads nothing but the
//! process environment and a local secrets file.

pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod networks;
pub mod resolver;

// Re-export main types
pub use config::{
    BindingSettings, CustomChainDescriptor, GasReportSettings, NetworkDefinition, ProjectPaths,
    ResolvedConfig, TestSettings,
};
pub use context::EnvironmentContext;
pub use error::{ConfigError, ConfigResult};
pub use loader::{EnvironmentLoader, SecretPolicy, SecretValidator};
pub use networks::{Profile, LOCAL_NETWORK};
pub use resolver::{resolve, resolve_startup_config, ResolutionPolicy};
