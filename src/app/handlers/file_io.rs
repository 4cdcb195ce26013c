//! Handler für Datei-Operationen (Laden, Speichern, Zusammenführen).

use anyhow::Result;

use crate::app::state::AppState;
use crate::app::use_cases;

pub fn request_open_file(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

pub fn request_save_file(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

pub fn load_file(state: &mut AppState, path: &str) -> Result<()> {
    use_cases::file_io::load_file(state, path)
}

pub fn save_file(state: &mut AppState, path: Option<String>) -> Result<()> {
    use_cases::file_io::save_file(state, path)
}

pub fn merge_files(state: &mut AppState, paths: Vec<String>, name: String) -> Result<()> {
    use_cases::file_io::merge_files(state, paths, name)
}

pub fn confirm_merge(state: &mut AppState) -> Result<()> {
    use_cases::file_io::confirm_merge(state)
}

pub fn dismiss_merge_dialog(state: &mut AppState) {
    use_cases::file_io::dismiss_merge_dialog(state);
}
