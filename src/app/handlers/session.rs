//! Handler für Session-Verwaltung (Anlegen, Umbenennen, Schreibschutz).

use crate::app::state::AppState;
use crate::app::use_cases;
use crate::core::session::SessionMode;

pub fn new_session(state: &mut AppState, name: &str, mode: SessionMode) {
    use_cases::session::new_session(state, name, mode);
}

pub fn rename_session(state: &mut AppState, name: &str) {
    use_cases::session::rename_session(state, name);
}

pub fn set_view_only(state: &mut AppState, view_only: bool) {
    use_cases::session::set_view_only(state, view_only);
}
