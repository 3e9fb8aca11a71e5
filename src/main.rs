//! yiffdl - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use yiffdl::{
    api::{E621Client, FaClient},
    cli::Args,
    config::{validate_config, Config},
    dedup::sorted_unique,
    download::{download_post, download_submission, run_batch},
    error::{exit_codes, Error, Result},
    output::{print_error, print_scan_summary, print_warning},
    scan::scan_list_files,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Scan(_) | Error::Io(_) => ExitCode::from(exit_codes::INPUT_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging on stderr; stdout carries the run report
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if config.fa.cookie_a.is_empty() || config.fa.cookie_b.is_empty() {
        print_warning("FurAffinity session cookies are empty; FA items will likely fail");
    }

    // Gather ids from every list, then collapse duplicates per platform
    let scanned = scan_list_files(&args.url_lists)?;
    let e6_ids = sorted_unique(scanned.e621);
    let fa_ids = sorted_unique(scanned.furaffinity);

    let total = e6_ids.len() + fa_ids.len();
    print_scan_summary(e6_ids.len(), fa_ids.len());

    // One authenticated client per platform, plus a bare client for
    // the raw file fetches
    let e6_client = E621Client::new(&config)?;
    let fa_client = FaClient::new(&config)?;
    let http = reqwest::Client::new();

    let show_progress = !args.quiet;

    // Process items one at a time; a failed item never stops the run
    let done = run_batch(&e6_ids, 0, total, |post_id| {
        download_post(&e6_client, &http, &config, post_id, show_progress)
    })
    .await;

    run_batch(&fa_ids, done, total, |sub_id| {
        download_submission(&fa_client, &http, &config, sub_id, show_progress)
    })
    .await;

    Ok(())
}
