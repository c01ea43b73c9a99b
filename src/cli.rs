use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;
use log::debug;

use crate::clients::{
    auth::Credentials,
    errors::{Error, Result},
};
use crate::scraper::{ConfigBuilder, Scraper};
use crate::settings::{Settings, require};

/// Command line arguments. Each flag falls back to an environment variable.
#[derive(Parser, Debug)]
#[command(name = "sdump")]
#[command(version, about = "Scrape a Spotify playlist into a text file", long_about = None)]
pub struct Cli {
    /// Spotify application client id
    #[arg(long = "client_id", env = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// Spotify application client secret
    #[arg(long = "client_secret", env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Refresh token of the user owning the playlist
    #[arg(long = "refresh_token", env = "REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Exact name of the playlist to dump
    #[arg(long, env = "PLAYLIST")]
    pub playlist: Option<String>,

    /// Destination file, overwritten if it exists
    #[arg(long, env = "OUT_PATH")]
    pub outpath: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,
}

impl Cli {
    // Validate the arguments, reporting the first missing one
    pub fn settings(self) -> Result<Settings> {
        let client_id = require(self.client_id, "client_id")?;
        let client_secret = require(self.client_secret, "client_secret")?;
        let refresh_token = require(self.refresh_token, "refresh_token")?;
        let playlist = require(self.playlist, "playlist")?;
        let out_path = self
            .outpath
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::ConfigurationError("Arg missing: outpath".into()))?;

        Ok(Settings {
            credentials: Credentials::new(client_id, client_secret, refresh_token),
            playlist,
            out_path,
            debug: self.debug,
        })
    }
}

fn setup_logging(settings: &Settings) {
    env_logger::Builder::new()
        .filter_module(env!("CARGO_CRATE_NAME"), settings.log_level())
        .target(env_logger::Target::Stdout)
        .parse_default_env()
        .init();
}

pub async fn run() -> Result<()> {
    // Values from .env never override the real environment
    dotenvy::dotenv().ok();

    let settings = Cli::parse().settings()?;
    setup_logging(&settings);
    debug!("Running with {settings:?}");

    let config = ConfigBuilder::new(settings).build()?;
    let scraper = Scraper::new(config);
    scraper.scrape().await?;
    Ok(())
}
