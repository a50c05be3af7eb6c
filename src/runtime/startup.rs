use std::path::Path;

use tracing::{info, warn};

use crate::config;
use crate::library;
use crate::playlist::{TrackList, TrackListError};

/// Tracks every fresh playlist starts with unless `seed.builtin` is off.
pub const BUILTIN_SEED: [(&str, &str, u32); 3] = [
    ("Bohemian Rhapsody", "Queen", 354),
    ("Hotel California", "Eagles", 390),
    ("Imagine", "John Lennon", 183),
];

/// Build the initial list: built-in seeds, configured seeds, then the
/// contents of `import_dir` when given.
pub fn build_list(
    settings: &config::Settings,
    import_dir: Option<&Path>,
) -> Result<TrackList, TrackListError> {
    let mut list = TrackList::with_field_limit(settings.list.field_limit());

    if settings.seed.builtin {
        for (title, artist, duration) in BUILTIN_SEED {
            list.append(title, artist, duration)?;
        }
    }
    for seed in &settings.seed.tracks {
        list.append(seed.title.trim(), seed.artist.trim(), seed.duration)?;
    }

    if let Some(dir) = import_dir {
        if dir.is_dir() {
            let tracks = library::scan(dir, &settings.import);
            let added = library::append_all(&mut list, &tracks)?;
            info!(dir = %dir.display(), added, "imported directory");
        } else {
            warn!(dir = %dir.display(), "import path is not a directory");
        }
    }

    Ok(list)
}
