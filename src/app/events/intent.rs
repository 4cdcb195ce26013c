use glam::Vec2;

use crate::core::point::{Rotation, Team};
use crate::core::session::SessionMode;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Das Mapping übersetzt sie in ausführbare [`super::AppCommand`]s.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Leinwand (Wolken-Punkt erfassen)
    CanvasClicked { position: Vec2 },
    /// Abgeschlossene Drag-Geste auf der Leinwand (gechartete Beobachtung)
    CanvasDragFinished { start: Vec2, end: Vec2 },
    /// Letzte Aktion rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Alle Punkte der Session entfernen (bleibt rückgängig machbar)
    ClearAllRequested,
    /// Aktuelle Rotation wechseln
    RotationSelected { rotation: Option<Rotation> },
    /// Aktuelle Trikotnummer wechseln
    JerseySelected { jersey: Option<String> },
    /// Aktuelle Team-Zuordnung wechseln
    TeamSelected { team: Option<Team> },
    /// Eintrag im Trikot-Filter umschalten
    JerseyFilterToggled { jersey: Option<String> },
    /// Eintrag im Rotations-Filter umschalten
    RotationFilterToggled { rotation: Option<Rotation> },
    /// Trikot-Filter leeren
    JerseyFilterCleared,
    /// Rotations-Filter leeren
    RotationFilterCleared,
    /// Beide Filterdimensionen leeren
    AllFiltersCleared,
    /// Neue, leere Session beginnen
    NewSessionRequested { name: String, mode: SessionMode },
    /// Laufende Session umbenennen
    SessionRenamed { name: String },
    /// Nur-Lese-Schutz setzen oder aufheben
    ViewOnlyChanged { view_only: bool },
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speichern unter aktuellem Pfad oder mit Dialog
    SaveRequested,
    /// Unter neuem Pfad speichern
    SaveAsRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Mehrere Session-Dateien zu einer neuen Session zusammenführen
    MergeRequested { paths: Vec<String>, name: String },
    /// Große Zusammenführung wurde im Dialog bestätigt
    MergeConfirmed,
    /// Zusammenführung wurde im Dialog abgebrochen
    MergeCancelled,
}
