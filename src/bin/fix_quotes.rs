use anyhow::Context;
use clap::Parser;
use site_ops::utils::logger;
use site_ops::{normalize_file, normalize_text, QuotesArgs};

// Read and write errors are not recovered: they end the run with a non-zero exit.
fn main() -> anyhow::Result<()> {
    let args = QuotesArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Normalizing quotes in {}", args.path.display());

    if args.dry_run {
        let content = std::fs::read_to_string(&args.path)
            .with_context(|| format!("failed to read {}", args.path.display()))?;
        let normalized = normalize_text(&content);
        println!(
            "🔍 Would replace {} double and {} single curly quotes in {}",
            normalized.stats.double_quotes,
            normalized.stats.single_quotes,
            args.path.display()
        );
        return Ok(());
    }

    let stats = normalize_file(&args.path)
        .with_context(|| format!("failed to normalize {}", args.path.display()))?;

    println!("Converted all curly quotes to straight quotes!");
    println!(
        "  {} double, {} single",
        stats.double_quotes, stats.single_quotes
    );
    Ok(())
}
