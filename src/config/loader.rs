//! Configuration file loading.
//!
//! YAML and JSON are supported, dispatched on the file extension. A
//! successfully loaded configuration has already been validated, so it is
//! safe to hand straight to the engine; anything invalid fails fast before
//! monitoring starts.

use std::path::Path;

use super::{ConfigError, MonitoringConfig};

/// Load and validate a monitoring configuration from a YAML or JSON file.
///
/// # Errors
/// Returns `ConfigError` if the file cannot be read, has an unsupported
/// extension, fails to parse, or fails validation.
pub fn load_config(path: impl AsRef<Path>) -> Result<MonitoringConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let config: MonitoringConfig = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            r#"
check_interval_secs: 30
sites:
  - url: https://example.com
    content_requirement: "Example Domain"
    timeout_secs: 10
  - url: https://httpbin.org/html
    content_requirement: "Herman Melville"
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.check_interval_secs, 30);
        assert_eq!(config.sites.len(), 2);
        assert_eq!(config.sites[0].timeout_secs, 10);
        // Unset timeout falls back to the default.
        assert_eq!(config.sites[1].timeout_secs, 30);
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.json",
            r#"{
                "sites": [
                    {"url": "https://example.com", "content_requirement": "Example Domain"}
                ]
            }"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.check_interval_secs, 60);
        assert_eq!(config.sites[0].content_requirement, "Example Domain");
    }

    #[test]
    fn test_load_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "config.toml", "sites = []");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "config.yaml", "sites: [url: {{");

        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::Yaml(_)
        ));
    }

    #[test]
    fn test_load_fails_fast_on_invalid_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "config.yaml",
            r#"
sites:
  - url: https://example.com
    content_requirement: ""
"#,
        );

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
