//! Tests for writing the starter configuration file

use authd_domain::error::Error;
use authd_infrastructure::config::ConfigLoader;
use authd_infrastructure::constants::CLIENT_DEFAULT_TIMEOUT_SECS;
use authd_server::run_init_config;

#[test]
fn test_init_config_writes_loadable_client_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("authd.toml");

    run_init_config(&path).expect("config written");

    let client = ConfigLoader::new()
        .with_config_path(&path)
        .load_client_config()
        .expect("client section loads");
    assert_eq!(client.timeout_secs, CLIENT_DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_init_config_leaves_secret_unset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("authd.toml");
    run_init_config(&path).expect("config written");

    let contents = std::fs::read_to_string(&path).expect("readable");
    assert!(contents.contains("[auth.jwt]"));
    assert!(contents.contains("secret = \"\""));
}

#[test]
fn test_init_config_does_not_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("authd.toml");
    std::fs::write(&path, "[server]\nport = 9000\n").expect("seed file");

    let err = run_init_config(&path).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(
        std::fs::read_to_string(&path).expect("readable"),
        "[server]\nport = 9000\n"
    );
}
