//! Error Extension Tests

use authd_domain::error::{Error, Result};
use authd_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("cannot load authd.toml");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_network_context() {
    let err = not_found().network_context("POST /auth/login").unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(err.to_string().contains("POST /auth/login"));
}

#[test]
fn test_context_passes_success_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.context("unused").expect("ok passes through"), 7);

    let err = not_found().context("serialize").unwrap_err();
    assert!(matches!(err, Error::Infrastructure { .. }));
}
