//! Undo/Redo-Handler.

use crate::app::state::AppState;
use crate::app::use_cases;

pub fn undo(state: &mut AppState) {
    use_cases::history::undo(state);
}

pub fn redo(state: &mut AppState) {
    use_cases::history::redo(state);
}
