/// Maximum number of characters kept in a title or artist by default.
pub const DEFAULT_FIELD_LIMIT: usize = 99;

/// A single track record held by a `TrackList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Length in whole seconds.
    pub duration: u32,
}

impl Track {
    /// Build a track, cutting `title` and `artist` down to `limit` characters.
    ///
    /// `None` keeps both fields as given.
    pub fn new(title: &str, artist: &str, duration: u32, limit: Option<usize>) -> Self {
        Self {
            title: truncate_chars(title, limit),
            artist: truncate_chars(artist, limit),
            duration,
        }
    }
}

/// Copy at most `limit` chars of `s`, never splitting a multi-byte character.
pub(crate) fn truncate_chars(s: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) => match s.char_indices().nth(limit) {
            Some((cut, _)) => s[..cut].to_string(),
            None => s.to_string(),
        },
        None => s.to_string(),
    }
}
