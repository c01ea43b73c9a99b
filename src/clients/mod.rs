/// Credentials and access tokens
pub mod auth;
/// Data entities for playlists, tracks and artists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;
/// Flat text output of scraped tracks
pub mod track_file;

pub use auth::{AccessToken, Credentials};
pub use spotify::{Endpoints, SpotifyClient};
pub use track_file::TrackFile;
