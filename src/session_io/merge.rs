//! Zusammenführen mehrerer Session-Dokumente zu einem neuen.

use crate::core::session::SessionMode;
use crate::session_io::document::{rfc3339_now, SessionDocument, DOCUMENT_VERSION};
use crate::session_io::error::SessionIoError;

/// Anzahl der Punkte, die eine Zusammenführung ergeben würde. Grundlage
/// für die Rückfrage vor sehr großen Ergebnissen.
pub fn combined_point_count(docs: &[SessionDocument]) -> usize {
    docs.iter().map(|d| d.points.len()).sum()
}

/// Führt mehrere geprüfte Dokumente zu einem neuen zusammen.
///
/// Alle Dokumente müssen exakt den Zielmodus tragen; das erste abweichende
/// wird im Fehler namentlich genannt. Die Punktlisten werden in
/// Übergabereihenfolge aneinandergehängt. Das Ergebnis beginnt mit leeren
/// Undo/Redo-Stapeln und frischem Zeitstempel.
pub fn combine_documents(
    name: &str,
    target_mode: SessionMode,
    docs: &[SessionDocument],
) -> Result<SessionDocument, SessionIoError> {
    if docs.len() < 2 {
        return Err(SessionIoError::NotEnoughDocuments(docs.len()));
    }

    for doc in docs {
        let found = SessionMode::from_wire(&doc.mode).ok_or_else(|| SessionIoError::Invalid {
            name: doc.name.clone(),
            reason: format!("unbekannter Modus '{}'", doc.mode),
        })?;
        if found != target_mode {
            return Err(SessionIoError::ModeMismatch {
                document: doc.name.clone(),
                expected: target_mode,
                found,
            });
        }
    }

    Ok(SessionDocument {
        version: Some(DOCUMENT_VERSION.to_string()),
        name: name.to_string(),
        mode: target_mode.as_wire().to_string(),
        saved_at: rfc3339_now(),
        points: docs.iter().flat_map(|d| d.points.iter().cloned()).collect(),
        undo_stack: Vec::new(),
        redo_stack: Vec::new(),
    })
}
