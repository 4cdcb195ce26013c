//! Use-Cases für Datei-Operationen: Laden, Speichern, Zusammenführen.

use std::path::Path;

use anyhow::{Context, Result};

use crate::app::state::AppState;
use crate::core::session::SessionMode;
use crate::session_io::{
    combine_documents, combined_point_count, read_session_document, read_session_file,
    write_session_file, SessionDocument, SessionIoError,
};
use crate::shared::options::ChartOptions;

pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
    log::debug!("Dateidialog zum Öffnen angefordert");
}

pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
    log::debug!("Dateidialog zum Speichern angefordert");
}

/// Lädt eine Session-Datei und übernimmt sie als laufende Session.
///
/// Die Datei wird vollständig geprüft und migriert, bevor irgendetwas am
/// Zustand verändert wird; ein Fehler lässt die laufende Session intakt.
pub fn load_file(state: &mut AppState, path: &str) -> Result<()> {
    state.ui.show_file_dialog = false;

    let loaded = read_session_file(Path::new(path), &state.options)
        .with_context(|| format!("Datei '{path}' konnte nicht geladen werden"))?;

    for warning in &loaded.warnings {
        log::warn!("{warning}");
    }
    if let Some(summary) = loaded.migration.summary() {
        log::info!("{summary}");
    }

    let point_count = loaded.session.ledger.point_count();
    state.session = loaded.session;
    state.filters.clear_all();
    state.ui.current_file_path = Some(path.to_string());
    state.ui.status_message = Some(format!(
        "'{}' geladen ({point_count} Punkte)",
        state.session.name
    ));
    log::info!(
        "Session '{}' mit {point_count} Punkten aus '{path}' geladen",
        state.session.name
    );
    Ok(())
}

/// Speichert die laufende Session. Ohne Pfadangabe geht es an den zuletzt
/// verwendeten Pfad; fehlt auch der, wird der Speichern-Dialog geöffnet.
pub fn save_file(state: &mut AppState, path: Option<String>) -> Result<()> {
    let target = match path.or_else(|| state.ui.current_file_path.clone()) {
        Some(target) => target,
        None => {
            state.ui.show_save_file_dialog = true;
            return Ok(());
        }
    };

    state.ui.show_save_file_dialog = false;
    write_session_file(Path::new(&target), &state.session)
        .with_context(|| format!("Datei '{target}' konnte nicht geschrieben werden"))?;
    state.ui.current_file_path = Some(target.clone());
    state.ui.status_message = Some(format!("Gespeichert nach '{target}'"));
    log::info!("Session '{}' nach '{target}' gespeichert", state.session.name);
    Ok(())
}

/// Führt mehrere Session-Dateien zu einer neuen Session zusammen.
///
/// Überschreitet die kombinierte Punktzahl die konfigurierte Schwelle,
/// wird zunächst nur der Bestätigungsdialog gefüllt; ausgeführt wird die
/// Zusammenführung dann erst durch [`confirm_merge`].
pub fn merge_files(state: &mut AppState, paths: Vec<String>, name: String) -> Result<()> {
    let docs = read_documents(&paths, &state.options)?;

    let combined = combined_point_count(&docs);
    if combined > state.options.merge_point_threshold {
        let dialog = &mut state.ui.merge_dialog;
        dialog.visible = true;
        dialog.combined_points = combined;
        dialog.pending_name = name;
        dialog.pending_paths = paths;
        log::info!("Zusammenführung mit {combined} Punkten wartet auf Bestätigung");
        return Ok(());
    }

    perform_merge(state, &docs, &name)
}

/// Führt eine zuvor angekündigte große Zusammenführung tatsächlich aus.
pub fn confirm_merge(state: &mut AppState) -> Result<()> {
    if !state.ui.merge_dialog.visible {
        log::debug!("Bestätigung ohne offene Zusammenführung ignoriert");
        return Ok(());
    }
    let paths = std::mem::take(&mut state.ui.merge_dialog.pending_paths);
    let name = std::mem::take(&mut state.ui.merge_dialog.pending_name);
    state.ui.merge_dialog.reset();

    let docs = read_documents(&paths, &state.options)?;
    perform_merge(state, &docs, &name)
}

pub fn dismiss_merge_dialog(state: &mut AppState) {
    state.ui.merge_dialog.reset();
    state.ui.status_message = Some("Zusammenführung abgebrochen".to_string());
    log::info!("Zusammenführung abgebrochen");
}

/// Liest alle Quelldateien geprüft und migriert ein.
fn read_documents(paths: &[String], options: &ChartOptions) -> Result<Vec<SessionDocument>> {
    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let (doc, warnings, migration) = read_session_document(Path::new(path), options)
            .with_context(|| format!("Datei '{path}' konnte nicht gelesen werden"))?;
        for warning in &warnings {
            log::warn!("{warning}");
        }
        if let Some(summary) = migration.summary() {
            log::info!("{path}: {summary}");
        }
        docs.push(doc);
    }
    Ok(docs)
}

/// Kombiniert die Dokumente und übernimmt das Ergebnis als neue Session.
/// Der Zielmodus ist der Modus des ersten Dokuments; alle weiteren müssen
/// ihm exakt entsprechen.
fn perform_merge(state: &mut AppState, docs: &[SessionDocument], name: &str) -> Result<()> {
    if docs.len() < 2 {
        return Err(SessionIoError::NotEnoughDocuments(docs.len()).into());
    }
    let first = &docs[0];
    let target_mode =
        SessionMode::from_wire(&first.mode).ok_or_else(|| SessionIoError::Invalid {
            name: first.name.clone(),
            reason: format!("unbekannter Modus '{}'", first.mode),
        })?;

    let merged = combine_documents(name, target_mode, docs)?;
    let session = merged.into_session(
        state.options.undo_bound(),
        state.options.max_session_name_len,
    )?;

    let point_count = session.ledger.point_count();
    let source_count = docs.len();
    state.session = session;
    state.filters.clear_all();
    state.ui.current_file_path = None;
    state.ui.status_message = Some(format!(
        "{source_count} Dateien zu '{}' zusammengeführt ({point_count} Punkte)",
        state.session.name
    ));
    log::info!(
        "{source_count} Dateien zu '{}' zusammengeführt, {point_count} Punkte",
        state.session.name
    );
    Ok(())
}
