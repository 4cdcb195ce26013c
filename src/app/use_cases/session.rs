//! Use-Cases rund um die Session-Identität.

use crate::app::state::AppState;
use crate::core::session::{Session, SessionMode};

/// Prüft ob die laufende Session verändert werden darf. Bei Schreibschutz
/// wird eine Statusmeldung gesetzt und `false` zurückgegeben.
pub(crate) fn ensure_editable(state: &mut AppState) -> bool {
    if state.session.view_only {
        log::warn!(
            "Änderung abgewiesen: Session '{}' ist schreibgeschützt",
            state.session.name
        );
        state.ui.status_message = Some("Session ist schreibgeschützt".to_string());
        false
    } else {
        true
    }
}

/// Ersetzt die laufende Session durch eine leere. Filter und Dateipfad
/// gehören zur alten Session und werden mit verworfen.
pub fn new_session(state: &mut AppState, name: &str, mode: SessionMode) {
    state.session = Session::new(
        name,
        mode,
        state.options.undo_bound(),
        state.options.max_session_name_len,
    );
    state.filters.clear_all();
    state.ui.current_file_path = None;
    state.ui.status_message = Some(format!("Neue Session '{}' ({mode})", state.session.name));
    log::info!(
        "Neue Session '{}' im Modus '{mode}' angelegt",
        state.session.name
    );
}

pub fn rename_session(state: &mut AppState, name: &str) {
    if !ensure_editable(state) {
        return;
    }
    state.session.rename(name, state.options.max_session_name_len);
    state.ui.status_message = Some(format!("Session umbenannt in '{}'", state.session.name));
    log::info!("Session umbenannt in '{}'", state.session.name);
}

pub fn set_view_only(state: &mut AppState, view_only: bool) {
    state.session.view_only = view_only;
    let label = if view_only { "aktiviert" } else { "aufgehoben" };
    state.ui.status_message = Some(format!("Schreibschutz {label}"));
    log::info!("Schreibschutz für '{}' {label}", state.session.name);
}
