//! Resolved configuration structures.

pub mod explorer;
pub mod network;
pub mod project;
pub mod resolved;

pub use explorer::CustomChainDescriptor;
pub use network::NetworkDefinition;
pub use project::{BindingSettings, GasReportSettings, ProjectPaths, TestSettings, SOLC_VERSION};
pub use resolved::ResolvedConfig;
