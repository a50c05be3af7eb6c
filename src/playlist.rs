//! The ordered track list: the core data structure of the organizer.
//!
//! `TrackList` keeps tracks in insertion/positional order using an arena of
//! index-linked nodes. The console driver only ever talks to it through the
//! operations exposed here.

mod error;
mod list;
mod model;

pub use error::TrackListError;
pub use list::{Iter, TrackList};
pub use model::{DEFAULT_FIELD_LIMIT, Track};
