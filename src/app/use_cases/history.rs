//! Undo/Redo mit Statusmeldung.

use crate::app::state::AppState;
use crate::app::use_cases::session::ensure_editable;

pub fn undo(state: &mut AppState) {
    if !ensure_editable(state) {
        return;
    }
    if state.session.ledger.undo() {
        state.ui.status_message = Some("Aktion rückgängig gemacht".to_string());
        log::debug!(
            "Undo, {} Punkt(e) verbleiben",
            state.session.ledger.point_count()
        );
    } else {
        state.ui.status_message = Some("Nichts rückgängig zu machen".to_string());
    }
}

pub fn redo(state: &mut AppState) {
    if !ensure_editable(state) {
        return;
    }
    if state.session.ledger.redo() {
        state.ui.status_message = Some("Aktion wiederhergestellt".to_string());
        log::debug!(
            "Redo, {} Punkt(e) vorhanden",
            state.session.ledger.point_count()
        );
    } else {
        state.ui.status_message = Some("Nichts wiederherzustellen".to_string());
    }
}
