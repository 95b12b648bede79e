use serial_test::serial;
use soccer_cli::{
    cli::ConfigAction,
    commands::handle_config_command,
    config::Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars},
    error::AppError,
};
use tempfile::tempdir;

fn clear_env() {
    unsafe {
        std::env::remove_var(env_vars::API_KEY);
        std::env::remove_var(env_vars::BASE_URL);
        std::env::remove_var(env_vars::LOG_FILE);
        std::env::remove_var(env_vars::HTTP_TIMEOUT);
    }
}

/// `config set` writes a file that a later load accepts
#[tokio::test]
#[serial]
async fn test_config_set_then_load() {
    clear_env();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    let path_str = path.to_string_lossy().to_string();

    let set = ConfigAction::Set {
        key: "api_key".to_string(),
        value: "abcd1234".to_string(),
    };
    handle_config_command(&set, &path_str).await.unwrap();

    let config = Config::load_from(&path_str).await.unwrap();
    assert_eq!(config.api_key, "abcd1234");
    assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    assert_eq!(config.masked_api_key(), "****1234");

    handle_config_command(&ConfigAction::List, &path_str)
        .await
        .unwrap();
}

/// Loading without a file or an env key explains how to fix it
#[tokio::test]
#[serial]
async fn test_load_without_key_fails() {
    clear_env();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = Config::load_from(&path.to_string_lossy()).await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains(env_vars::API_KEY));
}

/// Environment variables take precedence over the file
#[tokio::test]
#[serial]
async fn test_env_overrides_file() {
    clear_env();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    tokio::fs::write(&path, "api_key = \"from-file\"\nhttp_timeout_seconds = 3\n")
        .await
        .unwrap();

    unsafe {
        std::env::set_var(env_vars::API_KEY, "from-env");
        std::env::set_var(env_vars::HTTP_TIMEOUT, "20");
    }
    let config = Config::load_from(&path.to_string_lossy()).await.unwrap();
    clear_env();

    assert_eq!(config.api_key, "from-env");
    assert_eq!(config.http_timeout_seconds, 20);
}

/// An env key alone is enough to run without a config file
#[tokio::test]
#[serial]
async fn test_env_key_without_file() {
    clear_env();
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("absent.toml");

    unsafe {
        std::env::set_var(env_vars::API_KEY, "env-only");
    }
    let result = Config::load_from(&path.to_string_lossy()).await;
    clear_env();

    let config = result.unwrap();
    assert_eq!(config.api_key, "env-only");
    assert!(!path.exists());
}
