use egui::{Response, Ui};
use roster_business::version_info;

/// Displays the build version and commit in the menu bar.
pub fn env_version(ui: &mut Ui) -> Response {
    ui.weak(version_info::format_build_info())
}
