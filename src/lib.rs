pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CorsArgs, QuotesArgs};

pub use crate::config::CorsToolConfig;
pub use crate::core::{
    cors::{ApplierSettings, CorsApplier},
    process::SystemCommandRunner,
    quotes::{normalize_file, normalize_text},
};
pub use crate::domain::model::{ApplyOutcome, BucketId, CorsConfiguration, CorsRule, QuoteStats};
pub use crate::utils::error::{Result, SiteOpsError};
