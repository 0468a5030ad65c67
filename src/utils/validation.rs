use crate::utils::error::{Result, SiteOpsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Storage bucket identifiers look like `gs://bucket-name`.
pub fn validate_bucket_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Bucket URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match (url.scheme(), url.host_str()) {
            ("gs", Some(host)) if !host.is_empty() => Ok(()),
            ("gs", _) => Err(SiteOpsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: "Bucket URL has no bucket name".to_string(),
            }),
            (scheme, _) => Err(SiteOpsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported bucket scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid bucket URL: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SiteOpsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
