use std::path::PathBuf;

/// A track discovered on disk, before it is handed to a `TrackList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTrack {
    pub path: PathBuf,
    pub title: String,
    /// Empty when the file carries no artist tag.
    pub artist: String,
    /// Whole seconds; 0 when the file could not be probed.
    pub duration: u32,
}

impl ImportedTrack {
    /// Case-insensitive "artist - title" key used to order scan results.
    pub(crate) fn sort_key(&self) -> String {
        if self.artist.is_empty() {
            self.title.to_lowercase()
        } else {
            format!("{} - {}", self.artist, self.title).to_lowercase()
        }
    }
}
