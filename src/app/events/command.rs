use glam::Vec2;

use crate::core::point::{Rotation, Team};
use crate::core::session::SessionMode;

/// Commands sind geprüfte, ausführbare Mutationen des AppState.
/// Der Controller dispatcht sie an die Feature-Handler.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Wolken-Punkt an Leinwandposition erfassen
    AddCloudPoint { position: Vec2 },
    /// Gecharteten Punkt mit Liniensegment erfassen
    AddChartedPoint { start: Vec2, end: Vec2 },
    /// Punktliste leeren (als Aktion auf dem Undo-Stapel)
    ClearAllPoints,
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Aktuelle Rotation setzen
    SetCurrentRotation { rotation: Option<Rotation> },
    /// Aktuelle Trikotnummer setzen
    SetCurrentJersey { jersey: Option<String> },
    /// Aktuelle Team-Zuordnung setzen
    SetCurrentTeam { team: Option<Team> },
    /// Eintrag im Trikot-Filter umschalten
    ToggleJerseyFilter { jersey: Option<String> },
    /// Eintrag im Rotations-Filter umschalten
    ToggleRotationFilter { rotation: Option<Rotation> },
    /// Trikot-Filter leeren
    ClearJerseyFilter,
    /// Rotations-Filter leeren
    ClearRotationFilter,
    /// Beide Filterdimensionen leeren
    ClearAllFilters,
    /// Neue, leere Session anlegen
    NewSession { name: String, mode: SessionMode },
    /// Session umbenennen
    RenameSession { name: String },
    /// Nur-Lese-Schutz setzen
    SetViewOnly { view_only: bool },
    /// Open-Datei-Dialog anfordern
    RequestOpenFileDialog,
    /// Save-Datei-Dialog anfordern
    RequestSaveFileDialog,
    /// Session-Datei laden
    LoadFile { path: String },
    /// Session speichern (None = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Session-Dateien zusammenführen (ggf. mit Rückfrage)
    MergeFiles { paths: Vec<String>, name: String },
    /// Wartende Zusammenführung nach Rückfrage ausführen
    ConfirmMerge,
    /// Zusammenführungs-Dialog schließen und verwerfen
    DismissMergeDialog,
}
