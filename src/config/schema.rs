use std::path::PathBuf;

use serde::Deserialize;

use crate::playlist::DEFAULT_FIELD_LIMIT;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub list: ListSettings,
    pub seed: SeedSettings,
    pub import: ImportSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Whether titles and artists are cut down to `max_field_chars`.
    pub truncate_fields: bool,
    /// Character cap applied when `truncate_fields` is on.
    pub max_field_chars: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            truncate_fields: true,
            max_field_chars: DEFAULT_FIELD_LIMIT,
        }
    }
}

impl ListSettings {
    /// The limit handed to `TrackList::with_field_limit`.
    pub fn field_limit(&self) -> Option<usize> {
        self.truncate_fields.then_some(self.max_field_chars)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    /// Start with the three built-in example tracks.
    pub builtin: bool,
    /// Extra tracks appended after the built-ins, in order.
    pub tracks: Vec<SeedTrack>,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            builtin: true,
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedTrack {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Seconds.
    #[serde(default)]
    pub duration: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the key help box is drawn at the bottom.
    pub show_controls: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Music Playlist Organizer ".to_string(),
            show_controls: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Log file. Logging stays off when unset since the UI owns the terminal.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}
