pub mod cors;
pub mod process;
pub mod quotes;
pub mod report;

pub use crate::domain::model::{
    ApplyOutcome, ApplyReport, BucketId, CorsConfiguration, CorsRule, QuoteStats,
};
pub use crate::domain::ports::{CommandOutput, CommandRunner, Invocation};
pub use crate::utils::error::Result;
