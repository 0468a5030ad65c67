use crate::core::quotes::DEFAULT_TARGET;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "configure-cors")]
#[command(about = "Apply a CORS policy to a Cloud Storage bucket through gsutil")]
pub struct CorsArgs {
    /// Optional TOML file overriding the built-in bucket, tool and rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the configuration file and show the command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fix-quotes")]
#[command(about = "Replace curly quotes with straight quotes in a file, in place")]
pub struct QuotesArgs {
    /// File to rewrite
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Report what would change without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
