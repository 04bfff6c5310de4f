//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::options::{default_user_agent, DEFAULT_DOWNLOAD_DIRECTORY};
use crate::config::{Config, ResolutionPolicy};

/// Lecture2Go video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "lecture2go-downloader",
    version,
    about = "Download lecture recordings from Lecture2Go",
    long_about = "A CLI tool to download lecture recordings from the Lecture2Go video portal.\n\n\
                  Supports password-protected videos, whole lecture series and\n\
                  automatic or interactive quality selection."
)]
pub struct Args {
    /// Lecture2Go video page URL.
    #[arg(short, long)]
    pub url: String,

    /// Password for protected videos.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Download all videos in the series containing the URL.
    #[arg(short, long)]
    pub all: bool,

    /// Always download the MIN/MAX resolution. Omit to choose interactively.
    #[arg(short, long, value_enum)]
    pub resolution: Option<ResolutionArg>,

    /// Base directory for downloads.
    #[arg(short, long, default_value = DEFAULT_DOWNLOAD_DIRECTORY)]
    pub output: PathBuf,

    /// Browser user agent string.
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Verify TLS certificates (the portal's streaming hosts often fail this).
    #[arg(long)]
    pub verify_tls: bool,

    /// Hide download progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI resolution argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResolutionArg {
    /// Lowest available resolution.
    Min,
    /// Highest available resolution.
    Max,
}

impl From<ResolutionArg> for ResolutionPolicy {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Min => ResolutionPolicy::Min,
            ResolutionArg::Max => ResolutionPolicy::Max,
        }
    }
}

impl Args {
    /// Build the run configuration from the parsed arguments.
    pub fn into_config(self) -> Config {
        Config {
            url: self.url.trim().to_string(),
            password: self.password,
            download_all: self.all,
            resolution: self.resolution.map(Into::into),
            download_directory: self.output,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            accept_invalid_certs: !self.verify_tls,
            show_progress: !self.quiet,
        }
    }
}
