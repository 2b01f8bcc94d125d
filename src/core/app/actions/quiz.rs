use super::{App, AppAction, AppCommand};
use crate::core::preferences::Question;
use crate::core::range::Handle;

pub(super) fn handle_quiz_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::QuizNextQuestion => {
            app.ui.quiz_question = app.ui.quiz_question.next();
            app.ui.drag_handle = None;
        }
        AppAction::QuizPreviousQuestion => {
            app.ui.quiz_question = app.ui.quiz_question.previous();
            app.ui.drag_handle = None;
        }
        AppAction::QuizCycleAnswer { forward } => {
            app.preferences.cycle(app.ui.quiz_question, forward);
        }
        AppAction::QuizToggleNoPreference => {
            if app
                .preferences
                .toggle_no_preference(app.ui.quiz_question)
                .is_none()
            {
                app.ui.set_status("Pick \"No Preference\" from the answers for this question");
            }
        }
        AppAction::QuizSave => {
            app.preferences.save();
            app.ui.set_status("Preferences saved");
        }
        AppAction::QuizPress {
            column,
            track_width,
        } => {
            if slider_active(app) {
                app.ui.quiz_question = Question::CreditRange;
                let handle = app
                    .preferences
                    .credit_range
                    .nearest_handle(f64::from(column), f64::from(track_width));
                app.ui.drag_handle = Some(handle);
                drag(app, handle, f64::from(column), f64::from(track_width));
            }
        }
        AppAction::QuizDrag {
            column,
            track_width,
        } => {
            if let Some(handle) = app.ui.drag_handle {
                if slider_active(app) {
                    drag(app, handle, f64::from(column), f64::from(track_width));
                }
            }
        }
        AppAction::QuizRelease => {
            app.ui.drag_handle = None;
        }
        AppAction::QuizNudge { handle, steps } => {
            if slider_active(app) {
                let range = &app.preferences.credit_range;
                let (min, max) = range.bounds();
                let current = match handle {
                    Handle::Lower => range.lower(),
                    Handle::Upper => range.upper(),
                };
                let position = current - min + f64::from(steps) * range.step();
                drag(app, handle, position, max - min);
            }
        }
        _ => unreachable!("non-quiz action routed to quiz handler"),
    }
    None
}

fn slider_active(app: &mut App) -> bool {
    if app.preferences.no_credit_range {
        app.ui.set_status("Credit range is set to No preference");
        return false;
    }
    true
}

fn drag(app: &mut App, handle: Handle, position: f64, track_width: f64) {
    let range = &mut app.preferences.credit_range;
    let pulse = &mut app.ui.slider_pulse;
    match handle {
        Handle::Lower => range.drag_lower(position, track_width, pulse),
        Handle::Upper => range.drag_upper(position, track_width, pulse),
    };
}
