//! An ordered track list organizer.
//!
//! [`playlist::TrackList`] is the core: an arena-backed doubly linked list
//! of tracks. The remaining modules form the terminal front end that drives
//! it.

pub mod app;
pub mod config;
pub mod library;
pub mod playlist;
pub mod runtime;
mod ui;
