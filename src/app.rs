//! Application module: the console driver's model.
//!
//! `App` owns the `TrackList` and maps the eight menu operations onto it.
//! It parses and formats, but never reorders or edits tracks itself.

mod form;
mod format;
mod model;

pub use form::{Form, FormField, FormKind};
pub use format::{format_hhmmss, format_mmss};
pub use model::*;

#[cfg(test)]
mod tests;
