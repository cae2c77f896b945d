//! Environment snapshotting, secrets file loading, and secret checks.

pub mod env;
pub mod secrets;
pub mod validation;

pub use env::EnvironmentLoader;
pub use secrets::SecretsFile;
pub use validation::{SecretPolicy, SecretValidator};
