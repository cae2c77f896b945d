use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chainsmith_config::context::SECRETS_FILE_VAR;
use chainsmith_config::loader::{EnvironmentLoader, SecretsFile};
use chainsmith_config::ConfigError;
use tempfile::tempdir;

fn snapshot(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn parses_pairs_and_skips_comments_and_blank_lines() {
    let content = "PRIVATE_KEY=0xabc\n\n# deploy endpoint\nETH_SEPOLIA_RPC=https://rpc.example\n";
    let pairs = SecretsFile::parse(content, Path::new(".env")).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("PRIVATE_KEY".to_string(), "0xabc".to_string()),
            ("ETH_SEPOLIA_RPC".to_string(), "https://rpc.example".to_string()),
        ]
    );
}

#[test]
fn values_keep_embedded_equals_signs() {
    let pairs = SecretsFile::parse("TOKEN=abc=def==", Path::new(".env")).unwrap();
    assert_eq!(pairs, vec![("TOKEN".to_string(), "abc=def==".to_string())]);
}

#[test]
fn malformed_line_is_fatal_and_names_the_line() {
    let err = SecretsFile::parse("PRIVATE_KEY=0xabc\nnot a pair\n", Path::new("broken.env"))
        .unwrap_err();
    match err {
        ConfigError::MalformedSecretsFile { path, line } => {
            assert_eq!(path, "broken.env");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_key_is_fatal() {
    let err = SecretsFile::parse("=value", Path::new(".env")).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedSecretsFile { line: 1, .. }));
}

#[test]
fn missing_file_keeps_the_ambient_context() {
    let dir = tempdir().unwrap();
    let mut vars = snapshot(&[("PRIVATE_KEY", "0xabc")]);
    vars.insert(
        SECRETS_FILE_VAR.to_string(),
        dir.path().join("absent.env").display().to_string(),
    );

    let ctx = EnvironmentLoader::load_from_snapshot(vars).unwrap();
    assert_eq!(ctx.get("PRIVATE_KEY"), Some("0xabc"));
}

#[test]
fn file_entries_never_overwrite_ambient_variables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("secrets.env");
    fs::write(&path, "PRIVATE_KEY=0xfile\nETHERSCAN_API_KEY=key-from-file\n").unwrap();

    let mut vars = snapshot(&[("PRIVATE_KEY", "0xambient")]);
    vars.insert(SECRETS_FILE_VAR.to_string(), path.display().to_string());

    let ctx = EnvironmentLoader::load_from_snapshot(vars).unwrap();
    assert_eq!(ctx.get("PRIVATE_KEY"), Some("0xambient"));
    assert_eq!(ctx.get("ETHERSCAN_API_KEY"), Some("key-from-file"));
}

#[test]
fn unparseable_file_aborts_startup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("secrets.env");
    fs::write(&path, "PRIVATE_KEY=0xabc\ngibberish\n").unwrap();

    let vars = snapshot(&[(SECRETS_FILE_VAR, path.to_str().unwrap())]);
    let err = EnvironmentLoader::load_from_snapshot(vars).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedSecretsFile { line: 2, .. }));
}
