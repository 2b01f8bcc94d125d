use super::*;
use crate::core::app::Screen;
use crate::core::session::SubmitRejection;
use crate::utils::test_utils::{create_scripted_app, create_test_app};

#[test]
fn plain_text_is_processed_as_message() {
    let mut app = create_test_app();
    assert!(matches!(
        process_input(&mut app, "how do I relax?"),
        CommandResult::ProcessAsMessage
    ));
    assert!(matches!(
        process_input(&mut app, "/"),
        CommandResult::ProcessAsMessage
    ));
}

#[test]
fn unknown_command_sets_status() {
    let mut app = create_test_app();
    let result = process_input(&mut app, "/dance now");
    assert!(matches!(result, CommandResult::Continue));
    assert_eq!(
        app.ui.status.as_deref(),
        Some("Unknown command: /dance (try /help)")
    );
}

#[test]
fn command_names_ignore_case() {
    let mut app = create_test_app();
    process_input(&mut app, "/IMAGE sunset.png");
    assert_eq!(app.session.attachments().camera().len(), 1);
}

#[test]
fn help_lists_every_usage() {
    let mut app = create_test_app();
    process_input(&mut app, "/help");
    let status = app.ui.status.clone().unwrap_or_default();
    for command in all_commands() {
        assert!(status.contains(command.usage), "missing {}", command.usage);
    }
}

#[test]
fn attach_commands_fill_each_list() {
    let mut app = create_test_app();
    process_input(&mut app, "/image cam.jpg");
    process_input(&mut app, "/photo beach.jpg");
    process_input(&mut app, "/photo dog.jpg");
    process_input(&mut app, "/file notes.pdf");

    assert_eq!(app.session.attachments().lens(), (1, 2, 1));
    assert_eq!(app.ui.status.as_deref(), Some("Attached notes.pdf"));
}

#[test]
fn attach_without_name_shows_usage() {
    let mut app = create_test_app();
    process_input(&mut app, "/photo");
    assert_eq!(app.ui.status.as_deref(), Some("Usage: /photo <name>"));
    assert!(app.session.attachments().is_empty());
}

#[test]
fn attach_past_cap_reports_error() {
    let mut app = create_test_app();
    for index in 0..5 {
        process_input(&mut app, &format!("/image shot{index}.jpg"));
    }
    process_input(&mut app, "/image one-too-many.jpg");
    assert_eq!(app.session.attachments().camera().len(), 5);
    assert_eq!(
        app.ui.status.as_deref(),
        Some("Only 5 camera attachments can be added at once")
    );
}

#[test]
fn remove_takes_position_from_each_list() {
    let mut app = create_test_app();
    process_input(&mut app, "/image cam.jpg");
    process_input(&mut app, "/photo a.jpg");
    process_input(&mut app, "/photo b.jpg");

    process_input(&mut app, "/remove 2");
    assert_eq!(app.session.attachments().lens(), (1, 1, 0));
    assert_eq!(app.ui.status.as_deref(), Some("Removed 1 attachment(s)"));

    process_input(&mut app, "/remove 1");
    assert!(app.session.attachments().is_empty());
    assert_eq!(app.ui.status.as_deref(), Some("Removed 2 attachment(s)"));

    process_input(&mut app, "/remove 1");
    assert_eq!(app.ui.status.as_deref(), Some("No attachment at position 1"));

    process_input(&mut app, "/remove zero");
    assert_eq!(app.ui.status.as_deref(), Some("Usage: /remove <n>"));
}

#[test]
fn match_command_starts_a_turn() {
    let mut app = create_test_app();
    let result = process_input(&mut app, "/match digital");
    match result {
        CommandResult::Turn(outcome) => assert!(outcome.scheduled().is_some()),
        _ => panic!("expected a turn"),
    }
    assert_eq!(app.session.credits(), 49);

    let result = process_input(&mut app, "/match everything");
    assert!(matches!(result, CommandResult::Continue));
    assert_eq!(
        app.ui.status.as_deref(),
        Some("Usage: /match <session|circle|digital>")
    );
}

#[test]
fn match_command_is_refused_while_replying() {
    let mut app = create_test_app();
    process_input(&mut app, "/match session");
    let result = process_input(&mut app, "/match circle");
    assert!(matches!(
        result,
        CommandResult::Turn(SubmitOutcome::Rejected(SubmitRejection::TurnInFlight))
    ));
}

#[test]
fn tier_command_sets_or_cycles() {
    let mut app = create_test_app();
    process_input(&mut app, "/tier pro");
    assert_eq!(app.session.membership(), Membership::Pro);
    assert_eq!(app.ui.status.as_deref(), Some("Switched to AliveGPT Pro"));

    process_input(&mut app, "/tier");
    assert_eq!(app.session.membership(), Membership::Max);
    process_input(&mut app, "/tier");
    assert_eq!(app.session.membership(), Membership::Lite);

    process_input(&mut app, "/tier gold");
    assert_eq!(app.session.membership(), Membership::Lite);
    assert_eq!(
        app.ui.status.as_deref(),
        Some("Usage: /tier [lite|plus|pro|max]")
    );
}

#[test]
fn deep_command_needs_plus() {
    let mut app = create_test_app();
    process_input(&mut app, "/deep");
    assert!(!app.session.deep_research());

    let mut app = create_scripted_app(Membership::Plus, []);
    process_input(&mut app, "/deep");
    assert!(app.session.deep_research());
    assert_eq!(app.ui.status.as_deref(), Some("Deep research on"));
    process_input(&mut app, "/deep");
    assert_eq!(app.ui.status.as_deref(), Some("Deep research off"));
}

#[test]
fn buy_and_new_commands() {
    let mut app = create_test_app();
    process_input(&mut app, "/buy");
    assert_eq!(app.session.credits(), 60);

    assert!(app.session.submit_text("hello").scheduled().is_some());
    process_input(&mut app, "/new");
    assert!(app.session.messages().is_empty());
    assert!(!app.session.is_turn_in_flight());
}

#[test]
fn quit_requests_exit() {
    let mut app = create_test_app();
    app.ui.screen = Screen::Settings;
    process_input(&mut app, "/quit");
    assert!(app.ui.exit_requested);
    assert!(app.session.is_torn_down());
}
