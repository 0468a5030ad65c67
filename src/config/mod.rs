#[cfg(feature = "cli")]
pub mod cli;

use crate::core::cors::{ApplierSettings, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TOOL};
use crate::core::{BucketId, CorsConfiguration, CorsRule};
use crate::utils::error::{Result, SiteOpsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BUCKET_URL: &str = "gs://swash-app-436a1.firebasestorage.app";
pub const DEFAULT_PROJECT_ID: &str = "swash-app-436a1";

/// Settings for `configure-cors`. Every field defaults to the built-in
/// constants, so a TOML file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsToolConfig {
    pub bucket: BucketConfig,
    pub tool: ToolConfig,
    pub cors: Vec<CorsRule>,
}

impl Default for CorsToolConfig {
    fn default() -> Self {
        Self {
            bucket: BucketConfig::default(),
            tool: ToolConfig::default(),
            cors: CorsConfiguration::default().rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketConfig {
    pub url: String,
    pub project_id: String,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BUCKET_URL.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub program: String,
    pub timeout_seconds: u64,
    pub output_file: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl CorsToolConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn bucket_id(&self) -> BucketId {
        BucketId::new(self.bucket.url.clone())
    }

    pub fn project_id(&self) -> &str {
        &self.bucket.project_id
    }

    pub fn configuration(&self) -> CorsConfiguration {
        CorsConfiguration::new(self.cors.clone())
    }

    pub fn applier_settings(&self) -> ApplierSettings {
        ApplierSettings {
            program: self.tool.program.clone(),
            timeout: Duration::from_secs(self.tool.timeout_seconds),
            output_file: PathBuf::from(&self.tool.output_file),
        }
    }
}

impl Validate for CorsToolConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bucket_url("bucket.url", &self.bucket.url)?;
        validation::validate_non_empty_string("bucket.project_id", &self.bucket.project_id)?;
        validation::validate_non_empty_string("tool.program", &self.tool.program)?;
        validation::validate_path("tool.output_file", &self.tool.output_file)?;
        validation::validate_range("tool.timeout_seconds", self.tool.timeout_seconds, 1, 600)?;

        if self.cors.is_empty() {
            return Err(SiteOpsError::ConfigValidationError {
                field: "cors".to_string(),
                message: "At least one CORS rule is required".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_constants() {
        let config = CorsToolConfig::default();
        assert_eq!(config.bucket_id().as_str(), DEFAULT_BUCKET_URL);
        assert_eq!(config.configuration(), CorsConfiguration::default());

        let settings = config.applier_settings();
        assert_eq!(settings.program, "gsutil");
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(settings.output_file, PathBuf::from("cors_config.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = CorsToolConfig::from_toml_str("").unwrap();
        assert_eq!(config, CorsToolConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CorsToolConfig::from_toml_str(
            r#"
[bucket]
url = "gs://staging-bucket"

[tool]
timeout_seconds = 30

[[cors]]
origin = ["https://staging.example.com"]
method = ["GET"]
responseHeader = ["Content-Type"]
maxAgeSeconds = 60
"#,
        )
        .unwrap();

        assert_eq!(config.bucket.url, "gs://staging-bucket");
        assert_eq!(config.bucket.project_id, DEFAULT_PROJECT_ID);
        assert_eq!(config.tool.program, "gsutil");
        assert_eq!(config.tool.timeout_seconds, 30);
        assert_eq!(config.cors.len(), 1);
        assert_eq!(config.cors[0].origins, vec!["https://staging.example.com"]);
        assert_eq!(config.cors[0].max_age_seconds, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CorsToolConfig::from_toml_str("[tool\nprogram = ").unwrap_err();
        assert!(matches!(err, SiteOpsError::TomlError(_)));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = CorsToolConfig::default();
        config.bucket.url = "https://not-a-bucket".to_string();
        assert!(config.validate().is_err());

        let mut config = CorsToolConfig::default();
        config.tool.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = CorsToolConfig::default();
        config.cors.clear();
        assert!(matches!(
            config.validate(),
            Err(SiteOpsError::ConfigValidationError { .. })
        ));
    }
}
