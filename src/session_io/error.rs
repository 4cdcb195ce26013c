//! Fehlerarten der Session-Persistenz.

use thiserror::Error;

use crate::core::session::SessionMode;

/// Fehler beim Lesen, Prüfen oder Zusammenführen von Session-Dokumenten.
#[derive(Debug, Error)]
pub enum SessionIoError {
    /// Datei überschreitet das konfigurierte Größenlimit.
    #[error("Datei '{file}' ist zu groß: {len} Bytes (Limit {max})")]
    SizeLimit { file: String, len: u64, max: u64 },

    /// Dokument verletzt eine Strukturregel.
    #[error("Ungültiges Session-Dokument '{name}': {reason}")]
    Invalid { name: String, reason: String },

    /// Ein Dokument passt nicht zum Zielmodus der Zusammenführung.
    #[error(
        "Modus-Konflikt: Dokument '{document}' hat Modus '{found}', erwartet '{expected}'"
    )]
    ModeMismatch {
        document: String,
        expected: SessionMode,
        found: SessionMode,
    },

    /// Zusammenführung mit weniger als zwei Dokumenten.
    #[error("Zusammenführung braucht mindestens zwei Dokumente, erhalten: {0}")]
    NotEnoughDocuments(usize),

    #[error("JSON-Fehler: {0}")]
    Json(#[from] serde_json::Error),

    #[error("E/A-Fehler: {0}")]
    Io(#[from] std::io::Error),
}
