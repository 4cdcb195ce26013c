//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Leinwand-Gesten werden hier gegen die Geometrie geprüft: Klicks und
//! Drags außerhalb der Leinwand erzeugen keine Commands.

use crate::core::session::SessionMode;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { position } => {
            if !state.layout().is_within_bounds(position) {
                return vec![];
            }
            vec![AppCommand::AddCloudPoint { position }]
        }
        AppIntent::CanvasDragFinished { start, end } => {
            let layout = state.layout();
            match state.session.mode {
                // Im einfachen Modus zählt nur die Loslass-Position.
                SessionMode::Simple => {
                    if !layout.is_within_bounds(end) {
                        return vec![];
                    }
                    vec![AppCommand::AddCloudPoint { position: end }]
                }
                SessionMode::Charting => {
                    if !layout.is_within_bounds(start) || !layout.is_within_bounds(end) {
                        return vec![];
                    }
                    vec![AppCommand::AddChartedPoint { start, end }]
                }
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAllPoints],
        AppIntent::RotationSelected { rotation } => {
            vec![AppCommand::SetCurrentRotation { rotation }]
        }
        AppIntent::JerseySelected { jersey } => vec![AppCommand::SetCurrentJersey { jersey }],
        AppIntent::TeamSelected { team } => vec![AppCommand::SetCurrentTeam { team }],
        AppIntent::JerseyFilterToggled { jersey } => {
            vec![AppCommand::ToggleJerseyFilter { jersey }]
        }
        AppIntent::RotationFilterToggled { rotation } => {
            vec![AppCommand::ToggleRotationFilter { rotation }]
        }
        AppIntent::JerseyFilterCleared => vec![AppCommand::ClearJerseyFilter],
        AppIntent::RotationFilterCleared => vec![AppCommand::ClearRotationFilter],
        AppIntent::AllFiltersCleared => vec![AppCommand::ClearAllFilters],
        AppIntent::NewSessionRequested { name, mode } => {
            vec![AppCommand::NewSession { name, mode }]
        }
        AppIntent::SessionRenamed { name } => vec![AppCommand::RenameSession { name }],
        AppIntent::ViewOnlyChanged { view_only } => vec![AppCommand::SetViewOnly { view_only }],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
        AppIntent::MergeRequested { paths, name } => {
            vec![AppCommand::MergeFiles { paths, name }]
        }
        AppIntent::MergeConfirmed => vec![AppCommand::ConfirmMerge],
        AppIntent::MergeCancelled => vec![AppCommand::DismissMergeDialog],
    }
}
