use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", " 127.0.0.1 ");
        std::env::set_var("PORT", "8080");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "http");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_blank_host() {
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "  ");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ServerError::InvalidEnv { var: "HOST", .. })));

    unsafe { clear_server_env() };
}
