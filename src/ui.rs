//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Form, View, format_mmss};
use crate::config::UiSettings;
use crate::playlist::Track;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("a", "add to end");
    map.insert("i", "insert at position");
    map.insert("d", "remove by title");
    map.insert("f", "show forward");
    map.insert("b", "show reverse");
    map.insert("/", "search titles");
    map.insert("t", "total duration");
    map.insert("j/k", "down/up");
    map.insert("gg/G", "top/bottom");
    map.insert("q", "exit");
    map
});

/// Render the controls help text in menu order.
fn controls_text() -> String {
    let order = ["a", "i", "d", "f", "b", "/", "t", "j/k", "gg/G", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{k}] {v}")))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Cut `s` to `width` chars, marking the cut with `~`.
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

/// One table row: `No. Title Artist MM:SS`.
pub(crate) fn row_text(index: usize, track: &Track) -> String {
    format!(
        "{:<4} {:<25} {:<15} {}",
        index,
        fit(&track.title, 25),
        fit(&track.artist, 15),
        format_mmss(track.duration)
    )
}

fn view_title(app: &App) -> String {
    let n = app.list.len();
    match &app.view {
        View::Forward => format!(" playlist ({n} songs) "),
        View::Backward => format!(" playlist in reverse order ({n} songs) "),
        View::Search { query } => format!(" titles containing '{query}' (esc to go back) "),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Text of an open form, one `label: value` line per field with a cursor on
/// the focused one.
pub(crate) fn form_text(form: &Form) -> String {
    form.fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            if i == form.focus {
                format!("> {}: {}_", f.label, f.value)
            } else {
                format!("  {}: {}", f.label, f.value)
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let controls_height = if ui_settings.show_controls { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(controls_height),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tracklist ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = app.status.as_deref().unwrap_or("");
    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list
    {
        let rows = app.rows();

        // Only build ListItems for the visible window, keeping the cursor
        // roughly centered.
        let total = rows.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let sel = app.selected.min(total.saturating_sub(1));
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = sel.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let items: Vec<ListItem> = rows[start..end]
            .iter()
            .map(|&(i, t)| ListItem::new(row_text(i, t)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(view_title(app)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if total > 0 {
            state.select(Some(sel - start));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Form popup drawn over the list.
    if let Some(form) = &app.form {
        let height = form.fields.len() as u16 + 4;
        let popup_area = centered_rect_sized(60, height, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let popup = Paragraph::new(form_text(form)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(form.kind.title())
                .title_bottom(" enter: next/submit | tab/shift-tab: move | esc: cancel ")
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 1,
                    bottom: 0,
                }),
        );
        frame.render_widget(popup, popup_area);
    }

    if ui_settings.show_controls {
        let footer = Paragraph::new(controls_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FormKind;

    #[test]
    fn controls_text_lists_every_menu_key() {
        let text = controls_text();
        for key in ["[a]", "[i]", "[d]", "[f]", "[b]", "[/]", "[t]", "[q]"] {
            assert!(text.contains(key), "missing {key}");
        }
        assert!(text.starts_with("[a] add to end"));
    }

    #[test]
    fn row_text_aligns_columns() {
        let t = Track::new("Imagine", "John Lennon", 183, None);
        assert_eq!(
            row_text(3, &t),
            format!("{:<4} {:<25} {:<15} 03:03", 3, "Imagine", "John Lennon")
        );
    }

    #[test]
    fn fit_marks_cut_fields() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("abcdefghij", 5), "abcd~");
    }

    #[test]
    fn form_text_marks_focused_field() {
        let mut form = Form::new(FormKind::Append);
        form.push_char('X');
        assert_eq!(
            form_text(&form),
            "> Title: X_\n  Artist: \n  Duration (s): "
        );
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 10,
        };
        let r = centered_rect_sized(60, 8, area);
        assert!(r.width <= 38);
        assert!(r.x + r.width <= area.width);
        assert!(r.y + r.height <= area.height);
    }
}
