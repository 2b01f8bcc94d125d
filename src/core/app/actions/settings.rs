use super::{App, AppAction, AppCommand};

pub(super) fn handle_settings_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SettingsTogglePersonalization => {
            let enabled = app.settings.toggle_personalization();
            app.ui.set_status(if enabled {
                "Personalization on"
            } else {
                "Personalization off"
            });
        }
        AppAction::SettingsRequestExport => app.settings.request_export(),
        AppAction::SettingsConfirmExport => {
            if app.settings.is_export_prompt_open() {
                app.settings.confirm_export();
                app.ui.set_status("Data export requested");
            }
        }
        AppAction::SettingsCancelExport => app.settings.cancel_export(),
        _ => unreachable!("non-settings action routed to settings handler"),
    }
    None
}
