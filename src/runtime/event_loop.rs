use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, FormKind, View};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws the UI and dispatches key presses until
/// the user exits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.quit {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key_event(key, app, state);
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`.
pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.exit();
        return;
    }

    if app.form.is_some() {
        state.pending_gg = false;
        handle_form_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            app.exit();
        }
        KeyCode::Char('a') => {
            state.pending_gg = false;
            app.open_form(FormKind::Append);
        }
        KeyCode::Char('i') => {
            state.pending_gg = false;
            app.open_form(FormKind::Insert);
        }
        KeyCode::Char('d') => {
            state.pending_gg = false;
            app.open_form(FormKind::Remove);
        }
        KeyCode::Char('/') => {
            state.pending_gg = false;
            app.open_form(FormKind::Search);
        }
        KeyCode::Char('f') => {
            state.pending_gg = false;
            app.show_forward();
        }
        KeyCode::Char('b') => {
            state.pending_gg = false;
            app.show_backward();
        }
        KeyCode::Char('t') => {
            state.pending_gg = false;
            app.show_total_duration();
        }
        KeyCode::Esc => {
            state.pending_gg = false;
            if matches!(app.view, View::Search { .. }) {
                app.show_forward();
            }
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.select_last();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.prev();
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.form_enter(),
        code => {
            let Some(form) = app.form.as_mut() else {
                return;
            };
            match code {
                KeyCode::Tab | KeyCode::Down => {
                    form.advance();
                }
                KeyCode::BackTab | KeyCode::Up => form.retreat(),
                KeyCode::Backspace => form.pop_char(),
                KeyCode::Char(c) => {
                    if !c.is_control() {
                        form.push_char(c);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::TrackList;

    fn press(app: &mut App, state: &mut EventLoopState, code: KeyCode) {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app, state);
    }

    fn type_str(app: &mut App, state: &mut EventLoopState, text: &str) {
        for c in text.chars() {
            press(app, state, KeyCode::Char(c));
        }
    }

    fn seeded() -> App {
        let mut list = TrackList::new();
        list.append("Bohemian Rhapsody", "Queen", 354).unwrap();
        list.append("Hotel California", "Eagles", 390).unwrap();
        list.append("Imagine", "John Lennon", 183).unwrap();
        App::new(list)
    }

    #[test]
    fn insert_then_remove_through_keys() {
        let mut app = seeded();
        let mut state = EventLoopState::default();

        press(&mut app, &mut state, KeyCode::Char('i'));
        type_str(&mut app, &mut state, "2");
        press(&mut app, &mut state, KeyCode::Tab);
        type_str(&mut app, &mut state, "Yesterday");
        press(&mut app, &mut state, KeyCode::Enter);
        type_str(&mut app, &mut state, "The Beatles");
        press(&mut app, &mut state, KeyCode::Enter);
        type_str(&mut app, &mut state, "125");
        press(&mut app, &mut state, KeyCode::Enter);

        let titles: Vec<&str> = app.list.iter().map(|(_, t)| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Bohemian Rhapsody", "Yesterday", "Hotel California", "Imagine"]
        );

        // Cursor on row 3 (Hotel California), then remove it via the prefilled form.
        press(&mut app, &mut state, KeyCode::Char('j'));
        press(&mut app, &mut state, KeyCode::Char('j'));
        press(&mut app, &mut state, KeyCode::Char('d'));
        press(&mut app, &mut state, KeyCode::Enter);

        let titles: Vec<&str> = app.list.iter().map(|(_, t)| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Bohemian Rhapsody", "Yesterday", "Imagine"]);
    }

    #[test]
    fn letters_inside_a_form_are_text_not_commands() {
        let mut app = seeded();
        let mut state = EventLoopState::default();

        press(&mut app, &mut state, KeyCode::Char('/'));
        type_str(&mut app, &mut state, "qbt");
        assert!(!app.quit);
        assert_eq!(app.view, View::Forward);
        assert_eq!(app.form.as_ref().unwrap().value(0), "qbt");

        press(&mut app, &mut state, KeyCode::Backspace);
        assert_eq!(app.form.as_ref().unwrap().value(0), "qb");
        press(&mut app, &mut state, KeyCode::Esc);
        assert!(app.form.is_none());
    }

    #[test]
    fn search_then_escape_returns_to_forward_view() {
        let mut app = seeded();
        let mut state = EventLoopState::default();

        press(&mut app, &mut state, KeyCode::Char('/'));
        type_str(&mut app, &mut state, "Hotel");
        press(&mut app, &mut state, KeyCode::Enter);
        assert!(matches!(app.view, View::Search { .. }));
        assert_eq!(app.rows().len(), 1);

        press(&mut app, &mut state, KeyCode::Esc);
        assert_eq!(app.view, View::Forward);
    }

    #[test]
    fn gg_and_shift_g_jump() {
        let mut app = seeded();
        let mut state = EventLoopState::default();

        press(&mut app, &mut state, KeyCode::Char('G'));
        assert_eq!(app.selected, 2);

        press(&mut app, &mut state, KeyCode::Char('g'));
        assert_eq!(app.selected, 2);
        press(&mut app, &mut state, KeyCode::Char('g'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn reverse_total_and_quit_keys() {
        let mut app = seeded();
        let mut state = EventLoopState::default();

        press(&mut app, &mut state, KeyCode::Char('b'));
        assert_eq!(app.view, View::Backward);

        press(&mut app, &mut state, KeyCode::Char('t'));
        assert_eq!(
            app.status.as_deref(),
            Some("Total playlist duration: 00:15:27")
        );

        press(&mut app, &mut state, KeyCode::Char('q'));
        assert!(app.quit);
        assert!(app.list.is_empty());
    }
}
