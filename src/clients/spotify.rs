use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::clients::{
    auth::{AccessToken, Credentials, RefreshTokenRequest, TokenResponse},
    entities::{Artist, Playlist, Track},
    errors::{Error, Result},
};

pub const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

const PLAYLISTS_PAGE_LIMIT: usize = 50;
const TRACKS_PAGE_LIMIT: usize = 100;

/// Base URLs of the accounts service and the Web API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub accounts_url: String,
    pub api_url: String,
}

impl Endpoints {
    pub fn new(accounts_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Endpoints {
            accounts_url: accounts_url.into(),
            api_url: api_url.into(),
        }
    }

    fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }

    fn playlists_url(&self) -> String {
        format!("{}/me/playlists", self.api_url.trim_end_matches('/'))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(ACCOUNTS_BASE_URL, API_BASE_URL)
    }
}

#[derive(Deserialize, Debug)]
struct Page<T> {
    items: Vec<T>,
    total: usize,
}

#[derive(Deserialize, Debug)]
struct PlaylistItem {
    id: String,
    name: String,
    tracks: TracksRef,
}

#[derive(Deserialize, Debug)]
struct TracksRef {
    href: String,
}

#[derive(Deserialize, Debug)]
struct PlaylistTrackItem {
    track: Option<TrackObject>,
}

#[derive(Deserialize, Debug)]
struct TrackObject {
    name: String,
    artists: Vec<ArtistObject>,
}

#[derive(Deserialize, Debug)]
struct ArtistObject {
    name: String,
}

impl From<PlaylistItem> for Playlist {
    fn from(p: PlaylistItem) -> Playlist {
        Playlist {
            id: p.id,
            name: p.name,
            tracks_url: p.tracks.href,
        }
    }
}

impl TryFrom<PlaylistTrackItem> for Track {
    type Error = Error;

    fn try_from(item: PlaylistTrackItem) -> Result<Track> {
        let track = item
            .track
            .ok_or_else(|| Error::ProtocolError("playlist item has no track".into()))?;
        let artist = track.artists.into_iter().next().ok_or_else(|| {
            Error::ProtocolError(format!("track {:?} has no artists", track.name))
        })?;
        Ok(Track {
            name: track.name,
            artist: Artist { name: artist.name },
        })
    }
}

// Offset of the next page, or None once the declared total is reached.
// An empty page short of the total would never advance, so it is rejected.
fn next_offset(offset: usize, received: usize, total: usize) -> Result<Option<usize>> {
    let offset = offset + received;
    if offset >= total {
        return Ok(None);
    }
    if received == 0 {
        return Err(Error::ProtocolError(format!(
            "empty page at offset {offset} of declared total {total}"
        )));
    }
    Ok(Some(offset))
}

pub struct SpotifyClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(SpotifyClient { http, endpoints })
    }

    // Client for the public Spotify endpoints
    pub fn try_default() -> Result<Self> {
        Self::new(Endpoints::default())
    }

    // Exchange the refresh token for a fresh access token
    pub async fn request_access_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        let url = self.endpoints.token_url();
        debug!("Requesting access token from {url}");
        let response = self
            .http
            .post(&url)
            .form(&RefreshTokenRequest::from(credentials))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            warn!("Token endpoint answered {status}");
            return Err(Error::AuthenticationError(body));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        let access_token = token.access_token.ok_or_else(|| {
            Error::ProtocolError("token response has no access_token field".into())
        })?;
        debug!("Obtained access token ({} chars)", access_token.len());
        Ok(AccessToken::new(access_token))
    }

    // Find the first playlist of the current user named exactly `name`
    pub async fn find_playlist(&self, name: &str, token: &AccessToken) -> Result<Playlist> {
        let url = self.endpoints.playlists_url();
        let mut offset = 0;
        loop {
            let page: Page<PlaylistItem> = self
                .get_page(&url, token, offset, PLAYLISTS_PAGE_LIMIT)
                .await?;
            let received = page.items.len();
            debug!(
                "Scanning playlists {offset}..{} of {}",
                offset + received,
                page.total
            );

            if let Some(item) = page.items.into_iter().find(|p| p.name == name) {
                let playlist = Playlist::from(item);
                debug!("Playlist {name} found with id {}", playlist.id);
                return Ok(playlist);
            }

            match next_offset(offset, received, page.total)? {
                Some(next) => offset = next,
                None => break,
            }
        }
        Err(Error::NotFoundError(name.to_string()))
    }

    // Fetch every track of the collection behind `tracks_url`, in playlist order
    pub async fn get_playlist_tracks(
        &self,
        tracks_url: &str,
        token: &AccessToken,
    ) -> Result<Box<[Track]>> {
        let mut tracks = Vec::new();
        let mut offset = 0;
        loop {
            let page: Page<PlaylistTrackItem> = self
                .get_page(tracks_url, token, offset, TRACKS_PAGE_LIMIT)
                .await?;
            let received = page.items.len();
            for item in page.items {
                tracks.push(Track::try_from(item)?);
            }
            debug!("Fetched {} of {} tracks", tracks.len(), page.total);

            match next_offset(offset, received, page.total)? {
                Some(next) => offset = next,
                None => break,
            }
        }
        Ok(tracks.into_boxed_slice())
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &AccessToken,
        offset: usize,
        limit: usize,
    ) -> Result<Page<T>> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token.secret())
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(Error::ProtocolError(format!(
                "GET {url} (offset {offset}) returned {status}: {body}"
            )));
        }
        Ok(serde_json::from_str(&body)?)
    }
}
