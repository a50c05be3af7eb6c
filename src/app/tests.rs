use super::*;
use crate::playlist::TrackList;

fn seeded() -> App {
    let mut list = TrackList::new();
    list.append("Bohemian Rhapsody", "Queen", 354).unwrap();
    list.append("Hotel California", "Eagles", 390).unwrap();
    list.append("Imagine", "John Lennon", 183).unwrap();
    App::new(list)
}

fn row_titles(app: &App) -> Vec<(usize, String)> {
    app.rows()
        .into_iter()
        .map(|(i, t)| (i, t.title.clone()))
        .collect()
}

fn type_into(app: &mut App, text: &str) {
    for c in text.chars() {
        app.form.as_mut().unwrap().push_char(c);
    }
}

#[test]
fn add_track_reports_like_the_menu() {
    let mut app = seeded();
    app.add_track("Yesterday", "The Beatles", 125);

    assert_eq!(app.list.len(), 4);
    assert_eq!(
        app.status.as_deref(),
        Some("Added 'Yesterday' by The Beatles to the playlist.")
    );
}

#[test]
fn insert_track_uses_one_based_positions() {
    let mut app = seeded();
    app.insert_track(2, "Yesterday", "The Beatles", 125);

    assert_eq!(app.list.get(1).unwrap().title, "Yesterday");
    assert_eq!(
        app.status.as_deref(),
        Some("Inserted 'Yesterday' by The Beatles at position 2.")
    );
}

#[test]
fn insert_track_rejects_out_of_range_positions() {
    let mut app = seeded();
    for bad in [0, -3, 5] {
        app.insert_track(bad, "Nope", "Nobody", 1);
        assert_eq!(app.status.as_deref(), Some("Invalid position!"), "position {bad}");
        assert_eq!(app.list.len(), 3);
    }

    app.insert_track(4, "Last", "Somebody", 1);
    assert_eq!(app.list.last().unwrap().title, "Last");
}

#[test]
fn remove_track_reports_found_missing_and_empty() {
    let mut app = seeded();

    app.remove_track("Hotel California");
    assert_eq!(
        app.status.as_deref(),
        Some("Removed 'Hotel California' by Eagles from the playlist.")
    );
    assert_eq!(app.list.len(), 2);

    app.remove_track("Hotel California");
    assert_eq!(
        app.status.as_deref(),
        Some("Song 'Hotel California' not found in the playlist.")
    );

    let mut empty = App::new(TrackList::new());
    empty.remove_track("Anything");
    assert_eq!(empty.status.as_deref(), Some("Playlist is empty!"));
}

#[test]
fn views_follow_list_order() {
    let mut app = seeded();
    app.show_backward();
    assert_eq!(app.view, View::Backward);
    assert_eq!(
        row_titles(&app),
        vec![
            (3, "Imagine".to_string()),
            (2, "Hotel California".to_string()),
            (1, "Bohemian Rhapsody".to_string()),
        ]
    );
    assert_eq!(app.status.as_deref(), Some("Playlist in Reverse Order (3 songs)"));

    app.show_forward();
    assert_eq!(row_titles(&app)[0], (1, "Bohemian Rhapsody".to_string()));
}

#[test]
fn empty_list_views_say_so() {
    let mut app = App::new(TrackList::new());
    app.show_forward();
    assert_eq!(app.status.as_deref(), Some("Playlist is empty!"));
    app.show_backward();
    assert_eq!(app.status.as_deref(), Some("Playlist is empty!"));
}

#[test]
fn search_narrows_view_and_keeps_list_indices() {
    let mut app = seeded();
    app.search("Cal");

    assert_eq!(
        app.view,
        View::Search {
            query: "Cal".to_string()
        }
    );
    assert_eq!(app.status.as_deref(), Some("Found 1 song with 'Cal' in the title."));
    assert_eq!(row_titles(&app), vec![(2, "Hotel California".to_string())]);
}

#[test]
fn search_without_matches_keeps_current_view() {
    let mut app = seeded();
    app.show_backward();
    app.search("xyz");

    assert_eq!(app.view, View::Backward);
    assert_eq!(
        app.status.as_deref(),
        Some("No songs found with 'xyz' in the title.")
    );
}

#[test]
fn removing_last_search_hit_falls_back_to_forward_view() {
    let mut app = seeded();
    app.search("Imagine");
    app.remove_track("Imagine");

    assert_eq!(app.view, View::Forward);
    assert_eq!(app.rows().len(), 2);
    assert!(app.selected < 2);
}

#[test]
fn total_duration_is_formatted_as_hours() {
    let mut app = seeded();
    app.show_total_duration();
    assert_eq!(
        app.status.as_deref(),
        Some("Total playlist duration: 00:15:27")
    );
}

#[test]
fn exit_clears_the_list() {
    let mut app = seeded();
    app.exit();
    assert!(app.quit);
    assert!(app.list.is_empty());
}

#[test]
fn append_form_walks_fields_then_submits() {
    let mut app = seeded();
    app.open_form(FormKind::Append);

    type_into(&mut app, "  Yesterday ");
    app.form_enter();
    type_into(&mut app, "The Beatles");
    app.form_enter();
    type_into(&mut app, "125");
    app.form_enter();

    assert!(app.form.is_none());
    assert_eq!(app.list.last().unwrap().title, "Yesterday");
    assert_eq!(app.list.last().unwrap().duration, 125);
}

#[test]
fn bad_duration_keeps_form_open() {
    let mut app = seeded();
    app.open_form(FormKind::Append);
    type_into(&mut app, "Song");
    app.form_enter();
    type_into(&mut app, "Band");
    app.form_enter();
    type_into(&mut app, "-5");
    app.form_enter();

    assert!(app.form.is_some());
    assert_eq!(app.status.as_deref(), Some("Duration cannot be negative!"));
    assert_eq!(app.list.len(), 3);
}

#[test]
fn insert_form_parses_position() {
    let mut app = seeded();
    app.open_form(FormKind::Insert);
    type_into(&mut app, "1");
    app.form_enter();
    type_into(&mut app, "Opening");
    app.form_enter();
    type_into(&mut app, "Band");
    app.form_enter();
    type_into(&mut app, "30");
    app.form_enter();

    assert!(app.form.is_none());
    assert_eq!(app.list.first().unwrap().title, "Opening");
}

#[test]
fn remove_form_is_prefilled_with_selection() {
    let mut app = seeded();
    app.next();
    app.open_form(FormKind::Remove);

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.value(0), "Hotel California");

    app.form_enter();
    assert!(app.list.iter().all(|(_, t)| t.title != "Hotel California"));
}

#[test]
fn cancel_form_runs_nothing() {
    let mut app = seeded();
    app.open_form(FormKind::Search);
    type_into(&mut app, "Imagine");
    app.cancel_form();

    assert!(app.form.is_none());
    assert_eq!(app.view, View::Forward);
}

#[test]
fn cursor_wraps_both_ways() {
    let mut app = seeded();
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected_track().unwrap().title, "Imagine");
    app.select_first();
    assert_eq!(app.selected_track().unwrap().title, "Bohemian Rhapsody");
}

#[test]
fn parse_helpers_reject_garbage() {
    assert_eq!(parse_duration(" 42 "), Ok(42));
    assert!(parse_duration("").is_err());
    assert!(parse_duration("4m").is_err());
    assert!(parse_duration("-1").is_err());

    assert_eq!(parse_position("3"), Ok(3));
    assert_eq!(parse_position("-2"), Ok(-2));
    assert!(parse_position("two").is_err());
}

#[test]
fn format_helpers_pad_fields() {
    assert_eq!(format_mmss(354), "05:54");
    assert_eq!(format_mmss(3600), "60:00");
    assert_eq!(format_hhmmss(927), "00:15:27");
    assert_eq!(format_hhmmss(90061), "25:01:01");
}
