//! Controller: nimmt UI-Absichten entgegen und führt die daraus
//! abgeleiteten Kommandos aus.
//!
//! Der Controller selbst hält keinen Zustand. Alles Veränderliche liegt
//! im [`AppState`]; die eigentliche Arbeit erledigen die Handler.

use anyhow::Result;

use crate::app::events::{AppCommand, AppIntent};
use crate::app::handlers;
use crate::app::intent_mapping::map_intent_to_commands;
use crate::app::render_scene;
use crate::app::state::AppState;
use crate::shared::sketch::RecordingTarget;

pub struct AppController;

impl AppController {
    pub fn new() -> Self {
        Self
    }

    /// Übersetzt eine UI-Absicht in Kommandos und führt sie der Reihe
    /// nach aus.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> Result<()> {
        let commands = map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt ein einzelnes Kommando aus. Jedes Kommando landet zuerst im
    /// Kommando-Protokoll, auch wenn es anschließend scheitert.
    pub fn handle_command(&mut self, state: &mut AppState, command: AppCommand) -> Result<()> {
        state.command_log.record(&command);

        match command {
            // === Erfassung ===
            AppCommand::AddCloudPoint { position } => {
                handlers::charting::add_cloud_point(state, position)
            }
            AppCommand::AddChartedPoint { start, end } => {
                handlers::charting::add_charted_point(state, start, end)
            }
            AppCommand::ClearAllPoints => handlers::charting::clear_all_points(state),

            // === Verlauf ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Werkzeug ===
            AppCommand::SetCurrentRotation { rotation } => {
                handlers::charting::set_current_rotation(state, rotation)
            }
            AppCommand::SetCurrentJersey { jersey } => {
                handlers::charting::set_current_jersey(state, jersey)
            }
            AppCommand::SetCurrentTeam { team } => {
                handlers::charting::set_current_team(state, team)
            }

            // === Filter ===
            AppCommand::ToggleJerseyFilter { jersey } => {
                handlers::filters::toggle_jersey(state, jersey)
            }
            AppCommand::ToggleRotationFilter { rotation } => {
                handlers::filters::toggle_rotation(state, rotation)
            }
            AppCommand::ClearJerseyFilter => handlers::filters::clear_jerseys(state),
            AppCommand::ClearRotationFilter => handlers::filters::clear_rotations(state),
            AppCommand::ClearAllFilters => handlers::filters::clear_all(state),

            // === Session ===
            AppCommand::NewSession { name, mode } => {
                handlers::session::new_session(state, &name, mode)
            }
            AppCommand::RenameSession { name } => handlers::session::rename_session(state, &name),
            AppCommand::SetViewOnly { view_only } => {
                handlers::session::set_view_only(state, view_only)
            }

            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open_file(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save_file(state),
            AppCommand::LoadFile { path } => handlers::file_io::load_file(state, &path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save_file(state, path)?,
            AppCommand::MergeFiles { paths, name } => {
                handlers::file_io::merge_files(state, paths, name)?
            }
            AppCommand::ConfirmMerge => handlers::file_io::confirm_merge(state)?,
            AppCommand::DismissMergeDialog => handlers::file_io::dismiss_merge_dialog(state),
        }

        Ok(())
    }

    /// Baut die Zeichenliste für den aktuellen Zustand.
    pub fn build_render_scene(&self, state: &AppState) -> RecordingTarget {
        render_scene::build(state)
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
