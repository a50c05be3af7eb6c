//! Application model types: `App` and `View`.
//!
//! The `App` struct owns the track list, the current view over it, the
//! cursor, an optional input form and the last status message shown to the
//! user.

use tracing::{info, warn};

use super::form::{Form, FormKind};
use super::format::format_hhmmss;
use crate::playlist::{Track, TrackList, TrackListError};

/// Which traversal of the list is on screen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Forward,
    Backward,
    /// Titles containing `query`.
    Search { query: String },
}

/// The main application model.
pub struct App {
    pub list: TrackList,
    pub view: View,
    /// Cursor row within the current view.
    pub selected: usize,
    pub form: Option<Form>,
    pub status: Option<String>,
    pub quit: bool,
}

impl App {
    /// Create a new `App` around an existing list.
    pub fn new(list: TrackList) -> Self {
        Self {
            list,
            view: View::Forward,
            selected: 0,
            form: None,
            status: None,
            quit: false,
        }
    }

    /// Rows of the current view as `(1-based list index, track)`.
    pub fn rows(&self) -> Vec<(usize, &Track)> {
        match &self.view {
            View::Forward => self.list.iter().collect(),
            View::Backward => self.list.rev_iter().collect(),
            View::Search { query } => self.list.find_by_title_substring(query).collect(),
        }
    }

    /// Track under the cursor, if the view has any rows.
    pub fn selected_track(&self) -> Option<&Track> {
        self.rows().get(self.selected).map(|&(_, t)| t)
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Append a track and report it.
    pub fn add_track(&mut self, title: &str, artist: &str, duration: u32) {
        match self.list.append(title, artist, duration) {
            Ok(()) => {
                info!(title, artist, duration, "added track");
                self.set_status(format!("Added '{title}' by {artist} to the playlist."));
            }
            Err(e) => self.report_list_error(e),
        }
        self.clamp_selection();
    }

    /// Insert a track at the 1-based `position` the user typed.
    pub fn insert_track(&mut self, position: i64, title: &str, artist: &str, duration: u32) {
        let Some(index) = position
            .checked_sub(1)
            .and_then(|p| usize::try_from(p).ok())
        else {
            warn!(position, "insert position below 1");
            self.set_status("Invalid position!");
            return;
        };

        match self.list.insert_at(index, title, artist, duration) {
            Ok(()) => {
                info!(title, artist, duration, position, "inserted track");
                self.set_status(format!(
                    "Inserted '{title}' by {artist} at position {position}."
                ));
            }
            Err(e) => self.report_list_error(e),
        }
        self.clamp_selection();
    }

    /// Remove the first track titled exactly `title`.
    pub fn remove_track(&mut self, title: &str) {
        if self.list.is_empty() {
            self.set_status("Playlist is empty!");
            return;
        }

        match self.list.remove_by_title(title) {
            Some(removed) => {
                info!(title = %removed.title, artist = %removed.artist, "removed track");
                self.set_status(format!(
                    "Removed '{}' by {} from the playlist.",
                    removed.title, removed.artist
                ));
            }
            None => self.set_status(format!("Song '{title}' not found in the playlist.")),
        }
        self.clamp_selection();
    }

    /// Show the list front to back.
    pub fn show_forward(&mut self) {
        self.switch_view(View::Forward);
        self.report_size("Current Playlist");
    }

    /// Show the list back to front.
    pub fn show_backward(&mut self) {
        self.switch_view(View::Backward);
        self.report_size("Playlist in Reverse Order");
    }

    /// Narrow the view to titles containing `query`. With no matches the
    /// current view is kept.
    pub fn search(&mut self, query: &str) {
        let hits = self.list.find_by_title_substring(query).count();
        if hits == 0 {
            self.set_status(format!("No songs found with '{query}' in the title."));
            return;
        }

        self.switch_view(View::Search {
            query: query.to_string(),
        });
        let noun = if hits == 1 { "song" } else { "songs" };
        self.set_status(format!("Found {hits} {noun} with '{query}' in the title."));
    }

    /// Report the summed duration of the whole list.
    pub fn show_total_duration(&mut self) {
        let total = self.list.total_duration_secs();
        self.set_status(format!(
            "Total playlist duration: {}",
            format_hhmmss(total)
        ));
    }

    /// Release every track and ask the runtime to stop.
    pub fn exit(&mut self) {
        info!(tracks = self.list.len(), "exiting");
        self.list.clear();
        self.form = None;
        self.quit = true;
    }

    /// Open the input form for `kind`. Removal starts pre-filled with the
    /// title under the cursor.
    pub fn open_form(&mut self, kind: FormKind) {
        let form = match kind {
            FormKind::Remove => match self.selected_track() {
                Some(t) => Form::with_first_value(kind, &t.title),
                None => Form::new(kind),
            },
            _ => Form::new(kind),
        };
        self.form = Some(form);
    }

    /// Close the form without running anything.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Advance to the next field, or submit when on the last one.
    pub fn form_enter(&mut self) {
        let at_last = match self.form.as_mut() {
            Some(form) => !form.advance(),
            None => return,
        };
        if at_last {
            self.submit_form();
        }
    }

    /// Parse the open form and run its operation. Parse errors keep the form
    /// open and explain what is wrong.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        let outcome = match form.kind {
            FormKind::Append => parse_duration(form.value(2)).map(|duration| {
                self.add_track(form.value(0), form.value(1), duration);
            }),
            FormKind::Insert => parse_position(form.value(0)).and_then(|position| {
                parse_duration(form.value(3)).map(|duration| {
                    self.insert_track(position, form.value(1), form.value(2), duration);
                })
            }),
            FormKind::Remove => {
                self.remove_track(form.value(0));
                Ok(())
            }
            FormKind::Search => {
                self.search(form.value(0));
                Ok(())
            }
        };

        if let Err(msg) = outcome {
            self.set_status(msg);
            self.form = Some(form);
        }
    }

    /// Move the cursor down one row, wrapping to the top.
    pub fn next(&mut self) {
        let n = self.rows().len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    /// Move the cursor up one row, wrapping to the bottom.
    pub fn prev(&mut self) {
        let n = self.rows().len();
        if n > 0 {
            self.selected = if self.selected == 0 {
                n - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows().len().saturating_sub(1);
    }

    fn switch_view(&mut self, view: View) {
        self.view = view;
        self.selected = 0;
    }

    fn report_size(&mut self, heading: &str) {
        if self.list.is_empty() {
            self.set_status("Playlist is empty!");
        } else {
            let n = self.list.len();
            self.set_status(format!("{heading} ({n} songs)"));
        }
    }

    fn report_list_error(&mut self, err: TrackListError) {
        warn!(error = %err, "list operation failed");
        match err {
            TrackListError::InvalidPosition { .. } => self.set_status("Invalid position!"),
            TrackListError::OutOfMemory => self.set_status("Memory allocation failed!"),
        }
    }

    /// Keep the cursor inside the view after the list changed. A search view
    /// that lost all its matches falls back to the forward view.
    fn clamp_selection(&mut self) {
        let mut n = self.rows().len();
        if n == 0 && matches!(self.view, View::Search { .. }) {
            self.view = View::Forward;
            n = self.rows().len();
        }
        self.selected = self.selected.min(n.saturating_sub(1));
    }
}

/// Parse a duration in whole seconds. Negative or non-numeric input is
/// rejected here so it never reaches the list.
pub fn parse_duration(input: &str) -> Result<u32, String> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err("Duration cannot be negative!".to_string());
    }
    input
        .parse::<u32>()
        .map_err(|_| format!("Invalid duration '{input}': enter whole seconds."))
}

/// Parse a 1-based position. Range checks are left to the list.
pub fn parse_position(input: &str) -> Result<i64, String> {
    let input = input.trim();
    input
        .parse::<i64>()
        .map_err(|_| format!("Invalid position '{input}': enter a number."))
}
