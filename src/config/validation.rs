use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - Base URL must start with http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_key: &str,
    api_base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_key.trim().is_empty() {
        return Err(AppError::config_error(
            "API key is missing. Set it with `soccer_cli config set api_key <KEY>`",
        ));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BASE: &str = "https://v3.football.api-sports.io";

    #[test]
    fn test_valid_config() {
        assert!(validate_config("key", BASE, 10, &None).is_ok());
        assert!(validate_config("key", "http://localhost:8080", 1, &None).is_ok());
    }

    #[test]
    fn test_empty_api_key() {
        let err = validate_config("", BASE, 10, &None).unwrap_err();
        assert!(err.to_string().contains("API key is missing"));
        assert!(validate_config("   ", BASE, 10, &None).is_err());
    }

    #[test]
    fn test_base_url_needs_scheme() {
        assert!(validate_config("key", "v3.football.api-sports.io", 10, &None).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        assert!(validate_config("key", BASE, 0, &None).is_err());
    }

    #[test]
    fn test_log_file_path() {
        assert!(validate_config("key", BASE, 10, &Some(String::new())).is_err());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("soccer.log");
        let log_path = Some(log_path.to_string_lossy().to_string());
        assert!(validate_config("key", BASE, 10, &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
