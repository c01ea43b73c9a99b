#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: Artist, // first listed artist only
}

impl Track {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Track {
            name: name.into(),
            artist: Artist { name: artist.into() },
        }
    }
}

/// A playlist of the current user, resolved by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    /// Collection URL listing the playlist's tracks
    pub tracks_url: String,
}
