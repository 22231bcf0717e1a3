//! Configuration for Folio
//!
//! The hosting server reads a [`FolioConfig`] from a TOML file or from
//! `FOLIO_*` environment variables, and hands the browser the subset it
//! needs as a [`ClientConfig`] (served as `/config.json`).
//!
//! ```toml
//! [server]
//! bind_address = "127.0.0.1"
//! port = 8080
//! dist_dir = "crates/folio-web/dist"
//!
//! [backend]
//! api_base = "https://cms.example.com/api"
//!
//! [uploads]
//! max_files = 8
//! max_size_mb = 4
//! accept = "image/"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::upload::UploadPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub uploads: UploadPolicy,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FolioConfig {
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to parse config: {}", e)))
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("FOLIO_BIND_ADDRESS") {
            config.server.bind_address = addr;
        }
        if let Ok(port) = std::env::var("FOLIO_PORT") {
            if let Ok(p) = port.parse() {
                config.server.port = p;
            }
        }
        if let Ok(dir) = std::env::var("FOLIO_DIST_DIR") {
            config.server.dist_dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var("FOLIO_API_BASE") {
            config.backend.api_base = url;
        }
        if let Ok(max) = std::env::var("FOLIO_UPLOAD_MAX_FILES") {
            if let Ok(n) = max.parse() {
                config.uploads.max_files = n;
            }
        }
        if let Ok(max) = std::env::var("FOLIO_UPLOAD_MAX_SIZE_MB") {
            if let Ok(n) = max.parse() {
                config.uploads.max_size_mb = n;
            }
        }
        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOLIO_LOG_FORMAT") {
            config.logging.format = format;
        }

        config
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::InvalidConfig("server.port must be non-zero".into()));
        }
        if self.backend.api_base.trim().is_empty() {
            return Err(crate::Error::InvalidConfig("backend.api_base is empty".into()));
        }
        if self.uploads.max_files == 0 {
            return Err(crate::Error::InvalidConfig("uploads.max_files must be at least 1".into()));
        }
        if self.uploads.max_size_mb == 0 {
            return Err(crate::Error::InvalidConfig("uploads.max_size_mb must be at least 1".into()));
        }
        if self.pagination.window == 0 {
            return Err(crate::Error::InvalidConfig("pagination.window must be at least 1".into()));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(crate::Error::InvalidConfig(format!(
                    "Unknown logging.format: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// The part of the configuration the browser is allowed to see
    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.backend.api_base.clone(),
            uploads: self.uploads.clone(),
            page_window: self.pagination.window,
            per_page: self.pagination.per_page,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Directory holding the compiled UI bundle (`index.html`, wasm, css)
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            dist_dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the content backend's JSON API
    pub api_base: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Width of the bounded page-number window
    pub window: u32,
    pub per_page: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            window: crate::DEFAULT_PAGE_WINDOW,
            per_page: crate::DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Runtime settings published to the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
    pub uploads: UploadPolicy,
    pub page_window: u32,
    pub per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        FolioConfig::default().client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pagination.window, 5);
        assert_eq!(config.uploads.accept, "image/");
    }

    #[test]
    fn test_from_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
bind_address = "127.0.0.1"
port = 3000
dist_dir = "public"

[uploads]
max_files = 3
max_size_mb = 1
accept = "image/"
"#
        )
        .unwrap();

        let config = FolioConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, PathBuf::from("public"));
        assert_eq!(config.uploads.max_files, 3);
        // Untouched sections fall back to defaults
        assert_eq!(config.backend.api_base, "/api");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file_missing() {
        let err = FolioConfig::from_file("/nonexistent/folio.toml").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig(_)));
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FolioConfig::default();
        config.uploads.max_files = 0;
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.backend.api_base = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config_subset() {
        let mut config = FolioConfig::default();
        config.backend.api_base = "https://cms.example.com/api".into();
        config.pagination.window = 7;

        let client = config.client();
        assert_eq!(client.api_base, "https://cms.example.com/api");
        assert_eq!(client.page_window, 7);
        assert_eq!(client.uploads, config.uploads);
    }
}
