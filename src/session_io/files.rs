//! Laden und Speichern von Session-Dateien.

use std::fs;
use std::path::Path;

use crate::core::session::Session;
use crate::session_io::document::{decode_document, encode_document, SessionDocument};
use crate::session_io::error::SessionIoError;
use crate::session_io::migrate::{migrate_document, MigrationReport};
use crate::session_io::validate::validate_document;
use crate::shared::options::ChartOptions;

/// Ergebnis eines erfolgreichen Ladevorgangs.
#[derive(Debug)]
pub struct LoadedSession {
    pub session: Session,
    /// Auffälligkeiten aus der Strukturprüfung, zum Protokollieren.
    pub warnings: Vec<String>,
    pub migration: MigrationReport,
}

/// Liest eine Session-Datei in einem Zug: Größenprüfung, Dekodierung,
/// Strukturprüfung, Migration, Aufbau der Session.
///
/// Der Aufrufer übernimmt den Zustand erst nach einem `Ok`; jede vorher
/// abgebrochene Datei lässt die laufende Session unangetastet.
pub fn read_session_file(
    path: &Path,
    options: &ChartOptions,
) -> Result<LoadedSession, SessionIoError> {
    let (doc, warnings, migration) = read_session_document(path, options)?;
    let session = doc.into_session(options.undo_bound(), options.max_session_name_len)?;

    Ok(LoadedSession {
        session,
        warnings,
        migration,
    })
}

/// Wie [`read_session_file`], liefert aber das geprüfte und migrierte
/// Dokument selbst — für die Zusammenführung mehrerer Dateien.
pub fn read_session_document(
    path: &Path,
    options: &ChartOptions,
) -> Result<(SessionDocument, Vec<String>, MigrationReport), SessionIoError> {
    let label = file_label(path);

    let len = fs::metadata(path)?.len();
    if len > options.max_document_bytes {
        return Err(SessionIoError::SizeLimit {
            file: label,
            len,
            max: options.max_document_bytes,
        });
    }

    let json = fs::read_to_string(path)?;
    let mut doc = decode_document(&json)?;
    let warnings = validate_document(&doc, &label, plausible_coord_bound(options))?;
    let migration = migrate_document(&mut doc);

    Ok((doc, warnings, migration))
}

/// Schreibt eine Session als eingerücktes JSON, inklusive Zeitstempel.
pub fn write_session_file(path: &Path, session: &Session) -> Result<(), SessionIoError> {
    let doc = SessionDocument::from_session(session);
    let json = encode_document(&doc)?;
    fs::write(path, json)?;
    Ok(())
}

/// Dateiname einer Session: bereinigter Name, Modus-Suffix, `.json`.
pub fn session_file_name(session: &Session) -> String {
    format!("{}.json", session.file_stem())
}

/// Obergrenze plausibler Pixelkoordinaten: doppelte Leinwandbreite deckt
/// auch die hochformatige Chart-Leinwand ab.
fn plausible_coord_bound(options: &ChartOptions) -> f64 {
    f64::from(options.canvas_size_px) * 2.0
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
