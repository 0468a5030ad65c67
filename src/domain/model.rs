use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_ORIGINS: [&str; 5] = [
    "https://app.swashcleaning.co.uk",
    "https://swash-app-436a1.web.app",
    "https://swash-vt3nz4i6z-christopher-wessells-projects.vercel.app",
    "http://localhost:5000",
    "http://localhost:3000",
];

pub const DEFAULT_METHODS: [&str; 7] = ["GET", "HEAD", "DELETE", "PUT", "POST", "PATCH", "OPTIONS"];

pub const DEFAULT_RESPONSE_HEADERS: [&str; 3] = ["Content-Type", "Authorization", "x-goog-meta-*"];

pub const DEFAULT_MAX_AGE_SECONDS: u64 = 3600;

/// One CORS rule, serialized with the key names `gsutil cors set` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsRule {
    #[serde(rename = "origin")]
    pub origins: Vec<String>,
    #[serde(rename = "method")]
    pub methods: Vec<String>,
    #[serde(rename = "responseHeader")]
    pub response_headers: Vec<String>,
    #[serde(rename = "maxAgeSeconds")]
    pub max_age_seconds: u64,
}

impl Default for CorsRule {
    fn default() -> Self {
        Self {
            origins: DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
            methods: DEFAULT_METHODS.iter().map(|s| s.to_string()).collect(),
            response_headers: DEFAULT_RESPONSE_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_age_seconds: DEFAULT_MAX_AGE_SECONDS,
        }
    }
}

/// The document written to disk: a bare JSON array of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorsConfiguration {
    pub rules: Vec<CorsRule>,
}

impl Default for CorsConfiguration {
    fn default() -> Self {
        Self {
            rules: vec![CorsRule::default()],
        }
    }
}

impl CorsConfiguration {
    pub fn new(rules: Vec<CorsRule>) -> Self {
        Self { rules }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.origins.iter().map(String::as_str))
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.methods.iter().map(String::as_str))
    }
}

/// Remote bucket the configuration is applied to, e.g. `gs://name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketId(String);

impl BucketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub config_path: PathBuf,
    pub bucket: BucketId,
    pub stdout: String,
}

/// How a single apply attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { stdout: String },
    ToolMissing { tool: String },
    Rejected { stderr: String },
    Errored { message: String },
}

impl ApplyOutcome {
    pub fn from_result(result: Result<ApplyReport>) -> Self {
        use crate::utils::error::SiteOpsError;

        match result {
            Ok(report) => Self::Applied {
                stdout: report.stdout,
            },
            Err(SiteOpsError::ToolNotFound { tool }) => Self::ToolMissing { tool },
            Err(SiteOpsError::ToolFailed { stderr, .. }) => Self::Rejected { stderr },
            Err(e) => Self::Errored {
                message: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteStats {
    pub double_quotes: usize,
    pub single_quotes: usize,
}

impl QuoteStats {
    pub fn total(&self) -> usize {
        self.double_quotes + self.single_quotes
    }
}
