//! Sdump - dump a Spotify playlist to a text file
//!
//! This library exchanges a refresh token for an access token, finds a playlist
//! of the current user by name and writes its tracks as `name artist` lines.

/// Command line interface
pub mod cli;
/// Client modules for interacting with Spotify and the output file
pub mod clients;
/// Runs one scrape from authentication to the written file
pub mod scraper;
/// Validated run settings
pub mod settings;
