//! Handler für die Sichtbarkeitsfilter.
//!
//! Die Filterlogik selbst lebt in [`FilterEngine`]; hier passiert nur das
//! Umschalten samt Protokollierung, analog zu den Ansichts-Flags.
//!
//! [`FilterEngine`]: crate::core::filter::FilterEngine

use crate::app::state::AppState;
use crate::core::point::Rotation;

fn jersey_label(jersey: &Option<String>) -> String {
    match jersey {
        Some(number) => format!("Trikot {number}"),
        None => "ohne Trikot".to_string(),
    }
}

fn rotation_label(rotation: &Option<Rotation>) -> String {
    match rotation {
        Some(rotation) => format!("Rotation {rotation}"),
        None => "ohne Rotation".to_string(),
    }
}

pub fn toggle_jersey(state: &mut AppState, jersey: Option<String>) {
    let label = jersey_label(&jersey);
    let active = state.filters.toggle_jersey(jersey);
    log::debug!(
        "Trikotfilter: {label} {}",
        if active { "aufgenommen" } else { "entfernt" }
    );
}

pub fn toggle_rotation(state: &mut AppState, rotation: Option<Rotation>) {
    let label = rotation_label(&rotation);
    let active = state.filters.toggle_rotation(rotation);
    log::debug!(
        "Rotationsfilter: {label} {}",
        if active { "aufgenommen" } else { "entfernt" }
    );
}

pub fn clear_jerseys(state: &mut AppState) {
    state.filters.clear_jerseys();
    state.ui.status_message = Some("Trikotfilter zurückgesetzt".to_string());
}

pub fn clear_rotations(state: &mut AppState) {
    state.filters.clear_rotations();
    state.ui.status_message = Some("Rotationsfilter zurückgesetzt".to_string());
}

pub fn clear_all(state: &mut AppState) {
    state.filters.clear_all();
    state.ui.status_message = Some("Alle Filter zurückgesetzt".to_string());
}
