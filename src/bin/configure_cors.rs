use clap::Parser;
use site_ops::core::report::{self, RetainedFileNotice};
use site_ops::utils::{logger, validation::Validate};
use site_ops::{ApplyOutcome, CorsApplier, CorsArgs, CorsToolConfig, SiteOpsError, SystemCommandRunner};

#[tokio::main]
async fn main() {
    let args = CorsArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting configure-cors");
    tracing::debug!("CLI args: {:?}", args);

    // Only called once `run` has returned, so the retained-file notice has been printed.
    std::process::exit(run(&args).await);
}

async fn run(args: &CorsArgs) -> i32 {
    let config = match CorsToolConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_setup_error(&e),
    };

    if let Err(e) = config.validate() {
        return report_setup_error(&e);
    }

    let document = config.configuration();
    let bucket = config.bucket_id();
    let applier = CorsApplier::new(SystemCommandRunner, config.applier_settings());
    let invocation = applier.invocation(&bucket);

    let config_path = match applier.write_configuration(&document).await {
        Ok(path) => path,
        Err(e) => return report_setup_error(&e),
    };

    let config_json = match document.to_pretty_json() {
        Ok(json) => json,
        Err(e) => return report_setup_error(&e),
    };
    println!(
        "{}",
        report::render_preamble(
            &config_path,
            &config_json,
            &bucket,
            &applier.settings().program,
            config.project_id(),
        )
    );

    let _notice = RetainedFileNotice::new(&config_path, std::io::stdout());

    if args.dry_run {
        print!("{}", report::render_dry_run(&invocation));
        return 0;
    }

    let outcome = ApplyOutcome::from_result(applier.invoke(&bucket).await);
    match &outcome {
        ApplyOutcome::Applied { .. } => tracing::info!("CORS applied to {}", bucket),
        other => tracing::error!("CORS was not applied to {}: {:?}", bucket, other),
    }

    print!(
        "{}",
        report::render_outcome(&outcome, &document, &invocation, config.project_id())
    );
    outcome.exit_code()
}

fn report_setup_error(e: &SiteOpsError) -> i32 {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    1
}
