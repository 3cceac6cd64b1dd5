//! End-to-end behavior driven through `handle_event`, the way the plugin shim
//! drives it.

use zevents::app::FormField;
use zevents::{handle_event, Action, AppState, InputMode, Notifier, SearchFocus, Theme, UiEvent};

fn state() -> AppState {
    AppState::new(Theme::builtin_light(), Theme::builtin_dark())
}

/// Sends an event and executes its actions like the shim does.
fn send(state: &mut AppState, event: UiEvent) -> bool {
    let (render, actions) = handle_event(state, &event).unwrap();
    for action in actions {
        if let Action::Notify(notification) = action {
            state.banner.notify(notification);
        }
    }
    render
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, UiEvent::Char(c));
    }
}

fn fill_form(state: &mut AppState, fields: [&str; 5]) {
    send(state, UiEvent::OpenForm);
    for (index, value) in fields.iter().enumerate() {
        type_text(state, value);
        if index + 1 < fields.len() {
            send(state, UiEvent::NextField);
        }
    }
}

fn add_event(state: &mut AppState, name: &str) {
    fill_form(state, [name, "2024-05-01", "09:00", "Work", "a@b.com"]);
    send(state, UiEvent::SubmitForm);
    assert!(!state.is_form_open(), "{name} should have been added");
}

fn names(state: &AppState) -> Vec<String> {
    state.store.events().iter().map(|e| e.name.clone()).collect()
}

#[test]
fn incomplete_submission_changes_nothing() {
    let mut s = state();
    add_event(&mut s, "Existing");

    fill_form(&mut s, ["Team Sync", "2024-05-01", "", "Work", ""]);
    send(&mut s, UiEvent::SubmitForm);

    assert_eq!(names(&s), ["Existing"]);
    assert!(s.is_form_open());
    assert_eq!(s.form.value(FormField::Name), "Team Sync");

    let vm = s.compute_viewmodel(30, 80);
    let overlay = vm.form.expect("overlay still shown");
    assert_eq!(overlay.error.as_deref(), Some("Time is required"));
}

#[test]
fn complete_submission_appends_one_event() {
    let mut s = state();
    add_event(&mut s, "Lunch");

    fill_form(&mut s, ["Team Sync", "2024-05-01", "09:00", "Work", "a@b.com"]);
    assert!(send(&mut s, UiEvent::SubmitForm));

    assert_eq!(s.store.len(), 2);
    let event = &s.store.events()[1];
    assert_eq!(event.name, "Team Sync");
    assert_eq!(event.category, "Work");
    assert_eq!(event.guests, vec!["a@b.com".to_string()]);
    assert_eq!(event.formatted_datetime(), "5/1/2024, 9:00:00 AM");

    assert!(!s.is_form_open());
    for field in FormField::ALL {
        assert_eq!(s.form.value(field), "", "{field} buffer should be cleared");
    }
    assert_eq!(s.input_mode, InputMode::Normal);
}

#[test]
fn cancelling_clears_buffers() {
    let mut s = state();
    fill_form(&mut s, ["Draft", "2024-05-01", "", "", ""]);
    send(&mut s, UiEvent::CancelForm);
    send(&mut s, UiEvent::OpenForm);

    assert!(s.is_form_open());
    assert_eq!(s.form.value(FormField::Name), "");
    assert_eq!(s.form.value(FormField::Date), "");
    assert_eq!(s.form.focus, FormField::Name);
}

#[test]
fn search_keys_cannot_close_the_open_form() {
    let mut s = state();
    fill_form(&mut s, ["Draft", "", "", "", ""]);

    send(&mut s, UiEvent::ExitSearch);
    send(&mut s, UiEvent::SearchMode);
    assert!(s.is_form_open());
    assert!(s.compute_viewmodel(30, 80).form.is_some());

    send(&mut s, UiEvent::CancelForm);
    send(&mut s, UiEvent::OpenForm);
    assert_eq!(s.form.value(FormField::Name), "");
}

#[test]
fn invalid_date_or_time_is_rejected() {
    let mut s = state();
    fill_form(&mut s, ["Party", "2024-02-30", "20:00", "Social", ""]);
    send(&mut s, UiEvent::SubmitForm);
    assert!(s.store.is_empty());
    assert!(s.is_form_open());

    send(&mut s, UiEvent::CancelForm);
    fill_form(&mut s, ["Party", "2024-02-28", "8pm", "Social", ""]);
    send(&mut s, UiEvent::SubmitForm);
    assert!(s.store.is_empty());
    assert!(s.compute_viewmodel(30, 80).form.and_then(|f| f.error).is_some());
}

#[test]
fn delete_removes_selected_and_shifts_suffix() {
    let mut s = state();
    for name in ["A", "B", "C", "D"] {
        add_event(&mut s, name);
    }

    send(&mut s, UiEvent::KeyDown);
    send(&mut s, UiEvent::KeyDown);
    assert!(send(&mut s, UiEvent::DeleteSelected));

    assert_eq!(names(&s), ["A", "B", "D"]);
    assert_eq!(s.selected_event().map(|e| e.name.as_str()), Some("D"));
}

#[test]
fn delete_on_empty_store_is_noop() {
    let mut s = state();
    assert!(!send(&mut s, UiEvent::DeleteSelected));
    assert!(s.store.is_empty());
}

#[test]
fn deleting_during_search_removes_the_visible_event() {
    let mut s = state();
    for name in ["Lunch", "Dentist", "Team Sync", "Team Retro"] {
        add_event(&mut s, name);
    }

    send(&mut s, UiEvent::SearchMode);
    type_text(&mut s, "team");
    send(&mut s, UiEvent::FocusResults);
    assert_eq!(s.input_mode, InputMode::Search(SearchFocus::Navigating));

    send(&mut s, UiEvent::KeyDown);
    send(&mut s, UiEvent::DeleteSelected);

    assert_eq!(names(&s), ["Lunch", "Dentist", "Team Sync"]);
}

#[test]
fn search_filters_case_insensitively_and_keeps_order() {
    let mut s = state();
    for name in ["Team Sync", "Lunch", "TEAM retro"] {
        add_event(&mut s, name);
    }

    send(&mut s, UiEvent::SearchMode);
    let all: Vec<_> = s.visible_events().iter().map(|e| e.name.clone()).collect();
    assert_eq!(all, names(&s));

    type_text(&mut s, "team");
    let visible: Vec<_> = s.visible_events().iter().map(|e| e.name.clone()).collect();
    assert_eq!(visible, ["Team Sync", "TEAM retro"]);

    let vm = s.compute_viewmodel(40, 80);
    assert_eq!(vm.header.title, " Calendar App (2/3) ");
    assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 4)]);

    send(&mut s, UiEvent::ExitSearch);
    assert_eq!(s.visible_events().len(), 3);
}

#[test]
fn search_without_matches_shows_empty_state() {
    let mut s = state();
    add_event(&mut s, "Lunch");
    send(&mut s, UiEvent::SearchMode);
    type_text(&mut s, "zzz");

    let vm = s.compute_viewmodel(30, 80);
    assert!(vm.display_items.is_empty());
    let empty = vm.empty_state.expect("empty state");
    assert_eq!(empty.message, "No events match \"zzz\"");
}

#[test]
fn toggling_twice_restores_mode_and_keeps_events() {
    let mut s = state();
    add_event(&mut s, "Lunch");
    let before = s.store.clone();

    send(&mut s, UiEvent::ToggleDarkMode);
    assert!(s.dark_mode);
    assert!(s.theme().dark);
    assert_eq!(s.compute_viewmodel(30, 80).header.theme_toggle, "Light Mode");

    send(&mut s, UiEvent::ToggleDarkMode);
    assert!(!s.dark_mode);
    assert_eq!(s.store, before);
}

#[test]
fn reminder_acknowledges_without_mutating_store() {
    let mut s = state();
    add_event(&mut s, "Team Sync");
    s.reminder_time = "8:00 AM".to_string();
    let before = s.store.clone();

    let (render, actions) = handle_event(&mut s, &UiEvent::SetReminder).unwrap();
    assert!(render);
    let [Action::Notify(notification)] = actions.as_slice() else {
        panic!("expected one notification, got {actions:?}");
    };
    assert_eq!(notification.event_name, "Team Sync");
    assert_eq!(notification.remind_at, "8:00 AM");
    assert_eq!(s.store, before);

    s.banner.notify(notification.clone());
    let banner = s.compute_viewmodel(30, 80).banner.expect("banner shown");
    assert!(banner.message.contains("Team Sync"));
    assert!(banner.message.contains("8:00 AM"));

    assert!(send(&mut s, UiEvent::DismissNotice));
    assert!(s.compute_viewmodel(30, 80).banner.is_none());
}

#[test]
fn first_launch_shows_empty_list() {
    let s = zevents::initialize(&zevents::Config::default());
    let vm = s.compute_viewmodel(24, 80);

    assert!(vm.display_items.is_empty());
    assert_eq!(vm.header.title, " Calendar App (0) ");
    assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("No events yet"));
    assert!(vm.form.is_none());
}
