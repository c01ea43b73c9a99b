use log::{debug, info};

use crate::clients::{Credentials, SpotifyClient, TrackFile, errors::Result};
use crate::settings::Settings;

// Configuration for the Scraper struct
pub struct Config {
    pub spotify: SpotifyClient,
    pub credentials: Credentials,
    pub playlist: String,
    pub output: TrackFile,
}

pub struct ConfigBuilder {
    settings: Settings,
    spotify: Option<SpotifyClient>,
}

impl ConfigBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            spotify: None, // Talks to the public Spotify endpoints unless overridden
        }
    }

    #[must_use]
    pub fn spotify(mut self, spotify: SpotifyClient) -> Self {
        self.spotify = Some(spotify);
        self
    }

    pub fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        Ok(Config {
            spotify,
            credentials: self.settings.credentials,
            playlist: self.settings.playlist,
            output: TrackFile::new(self.settings.out_path),
        })
    }
}

// Scrapes one playlist into the output file
pub struct Scraper {
    config: Config,
}

impl Scraper {
    pub fn new(config: Config) -> Self {
        Scraper { config }
    }

    // Returns the number of tracks written. The output file is only touched
    // once every track has been fetched.
    pub async fn scrape(&self) -> Result<usize> {
        let spotify = &self.config.spotify;

        info!("Authorizing Spotify client ...");
        let token = spotify
            .request_access_token(&self.config.credentials)
            .await?;

        info!("Looking up playlist {:?} ...", self.config.playlist);
        let playlist = spotify.find_playlist(&self.config.playlist, &token).await?;

        debug!("Fetching tracks from {}", playlist.tracks_url);
        let tracks = spotify
            .get_playlist_tracks(&playlist.tracks_url, &token)
            .await?;

        debug!(
            "Dumping {} tracks to {:?}",
            tracks.len(),
            self.config.output.path()
        );
        self.config.output.write(&tracks).await?;

        info!(
            "Scrape completed. Dumped {} tracks to {:?}",
            tracks.len(),
            self.config.output.path()
        );
        Ok(tracks.len())
    }
}
