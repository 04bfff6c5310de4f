//! Lecture2Go Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use lecture2go_downloader::{
    api::Session,
    cli::Args,
    config::validate_config,
    download::{selector_for, Downloader},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_run_stats},
    page::Lecture2GoParser,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::CredentialRequired(_) | Error::CredentialIncorrect(_) => {
                    ExitCode::from(exit_codes::CREDENTIAL_ERROR as u8)
                }
                Error::Config(_) | Error::ConfigValidation { .. } => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::ManifestNotFound(_)
                | Error::ManifestEmpty(_)
                | Error::M3U8(_)
                | Error::Download(_)
                | Error::Http(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                Error::PageStructure(_) => ExitCode::from(exit_codes::PAGE_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    let config = args.into_config();
    validate_config(&config)?;

    print_config_summary(
        &config.url,
        if config.download_all { "series" } else { "single" },
        &config.resolution_label(),
        &config.download_directory.display().to_string(),
    );

    let session = Session::new(&config)?;
    let parser = Lecture2GoParser;

    let mut downloader = Downloader::new(&session, &parser, selector_for(&config), &config);
    let stats = downloader.run().await?;

    print_run_stats(&stats);

    Ok(())
}
