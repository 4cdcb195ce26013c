//! Handler für Punkterfassung und Werkzeug-Einstellungen.

use glam::Vec2;

use crate::app::state::AppState;
use crate::app::use_cases;
use crate::core::point::{Rotation, Team};

pub fn add_cloud_point(state: &mut AppState, position: Vec2) {
    use_cases::charting::add_cloud_point(state, position);
}

pub fn add_charted_point(state: &mut AppState, start: Vec2, end: Vec2) {
    use_cases::charting::add_charted_point(state, start, end);
}

pub fn clear_all_points(state: &mut AppState) {
    use_cases::charting::clear_all_points(state);
}

pub fn set_current_rotation(state: &mut AppState, rotation: Option<Rotation>) {
    use_cases::charting::set_current_rotation(state, rotation);
}

pub fn set_current_jersey(state: &mut AppState, jersey: Option<String>) {
    use_cases::charting::set_current_jersey(state, jersey);
}

pub fn set_current_team(state: &mut AppState, team: Option<Team>) {
    use_cases::charting::set_current_team(state, team);
}
