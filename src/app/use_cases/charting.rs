//! Use-Cases für Punkterfassung und Werkzeug-Einstellungen.

use glam::Vec2;

use crate::app::state::AppState;
use crate::app::use_cases::session::ensure_editable;
use crate::core::point::{is_valid_jersey, ChartLine, ChartPoint, Rotation, Team};
use crate::core::session::SessionMode;

/// Erfasst einen Wolken-Punkt (Klick-Geste). Die aktuelle Rotation wird
/// dem Punkt aufgeprägt; Trikot und Team bleiben bei Wolken-Punkten leer.
pub fn add_cloud_point(state: &mut AppState, position: Vec2) {
    if !ensure_editable(state) {
        return;
    }
    let point = ChartPoint::new(position, state.tool.current_rotation);
    if state.session.ledger.add_point(point) {
        log::debug!(
            "Wolkenpunkt bei ({:.1}, {:.1}) erfasst",
            position.x,
            position.y
        );
    } else {
        log::warn!("Wolkenpunkt mit nicht endlichen Koordinaten verworfen");
    }
}

/// Erfasst einen Linien-Punkt (Drag-Geste, nur im Charting-Modus).
/// Der Punkt landet am Drag-Ende; Rotation, Trikot und Team kommen aus
/// den aktuellen Werkzeug-Einstellungen.
pub fn add_charted_point(state: &mut AppState, start: Vec2, end: Vec2) {
    if !ensure_editable(state) {
        return;
    }
    if state.session.mode != SessionMode::Charting {
        log::warn!("Linienpunkt im Modus '{}' ignoriert", state.session.mode);
        return;
    }
    let point = ChartPoint::charted(
        end,
        ChartLine::new(start, end),
        state.tool.current_rotation,
        state.tool.current_jersey.clone(),
        state.tool.current_team,
    );
    if state.session.ledger.add_point(point) {
        log::debug!(
            "Linienpunkt ({:.1}, {:.1}) nach ({:.1}, {:.1}) erfasst",
            start.x,
            start.y,
            end.x,
            end.y
        );
    } else {
        log::warn!("Linienpunkt mit nicht endlichen Koordinaten verworfen");
    }
}

pub fn clear_all_points(state: &mut AppState) {
    if !ensure_editable(state) {
        return;
    }
    let removed = state.session.ledger.clear_all();
    if removed > 0 {
        state.ui.status_message = Some(format!("{removed} Punkt(e) entfernt"));
        log::info!("{removed} Punkt(e) aus '{}' entfernt", state.session.name);
    } else {
        log::debug!("Keine Punkte zum Entfernen");
    }
}

/// Setzt die aktuelle Rotation. Ist gerade ein Rotationsfilter aktiv,
/// wird die neue Rotation mit aufgenommen, damit frisch erfasste Punkte
/// sichtbar bleiben.
pub fn set_current_rotation(state: &mut AppState, rotation: Option<Rotation>) {
    state.tool.current_rotation = rotation;
    state.filters.auto_include_rotation(rotation);
    match rotation {
        Some(rotation) => log::debug!("Aktuelle Rotation: {rotation}"),
        None => log::debug!("Aktuelle Rotation: keine"),
    }
}

/// Setzt die aktuelle Trikotnummer. Ungültige Nummern (leer, länger als
/// zwei Zeichen, Nicht-Ziffern) werden abgewiesen.
pub fn set_current_jersey(state: &mut AppState, jersey: Option<String>) {
    if let Some(ref number) = jersey {
        if !is_valid_jersey(number) {
            log::warn!("Ungültige Trikotnummer '{number}' abgewiesen");
            state.ui.status_message = Some(format!("Ungültige Trikotnummer '{number}'"));
            return;
        }
    }
    state.tool.current_jersey = jersey;
}

pub fn set_current_team(state: &mut AppState, team: Option<Team>) {
    state.tool.current_team = team;
}
