//! Application State — zentrale Datenhaltung.

use indexmap::IndexSet;

use super::CommandLog;
use crate::core::filter::FilterEngine;
use crate::core::geometry::CourtLayout;
use crate::core::point::{Rotation, Team};
use crate::core::session::{Session, SessionMode};
use crate::shared::ChartOptions;

/// Aktuelle Erfassungs-Einstellungen; sie werden neuen Punkten aufgeprägt.
#[derive(Debug, Clone)]
pub struct ChartToolState {
    /// Aktuelle Rotation (Startaufstellung: 1)
    pub current_rotation: Option<Rotation>,
    /// Aktuelle Trikotnummer für gechartete Punkte
    pub current_jersey: Option<String>,
    /// Aktuelle Team-Zuordnung für gechartete Punkte
    pub current_team: Option<Team>,
}

impl Default for ChartToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartToolState {
    /// Erstellt den Standard-Werkzeugzustand (Rotation 1, keine Tags).
    pub fn new() -> Self {
        Self {
            current_rotation: Rotation::new(1),
            current_jersey: None,
            current_team: None,
        }
    }
}

/// Zustand des Bestätigungsdialogs vor großen Zusammenführungen.
#[derive(Debug, Clone, Default)]
pub struct MergeDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Punktzahl, die das Ergebnis hätte
    pub combined_points: usize,
    /// Name der wartenden Ziel-Session
    pub pending_name: String,
    /// Quellpfade der wartenden Zusammenführung
    pub pending_paths: Vec<String>,
}

impl MergeDialogState {
    /// Setzt den Dialog zurück und schließt ihn.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Migrations- oder Merge-Ergebnis)
    pub status_message: Option<String>,
    /// Bestätigungsdialog für große Zusammenführungen
    pub merge_dialog: MergeDialogState,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Aktive Session (Name, Modus, Punkte, Verlauf)
    pub session: Session,
    /// Sichtbarkeitsfilter über Trikots und Rotationen
    pub filters: FilterEngine,
    /// Erfassungs-Einstellungen
    pub tool: ChartToolState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Leinwandmaße, Limits)
    pub options: ChartOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerer Session im einfachen Modus.
    pub fn new() -> Self {
        Self::with_options(ChartOptions::default())
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen.
    pub fn with_options(options: ChartOptions) -> Self {
        let session = Session::new(
            "session",
            SessionMode::Simple,
            options.undo_bound(),
            options.max_session_name_len,
        );
        Self {
            session,
            filters: FilterEngine::new(),
            tool: ChartToolState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Leinwand-Geometrie für den Modus der aktiven Session.
    pub fn layout(&self) -> CourtLayout {
        CourtLayout::from_options(self.session.mode, &self.options)
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.session.ledger.point_count()
    }

    /// Gibt die Anzahl der Punkte zurück, die den Filter passieren.
    pub fn visible_point_count(&self) -> usize {
        self.filters.apply(self.session.ledger.points()).count()
    }

    /// Wertemenge für die Trikot-Filterauswahl: alle in der Session
    /// vorkommenden Trikotnummern in Erst-Auftretens-Reihenfolge.
    pub fn jersey_filter_options(&self) -> IndexSet<Option<String>> {
        FilterEngine::collect_jersey_values(self.session.ledger.points())
    }

    /// Wertemenge für die Rotations-Filterauswahl.
    pub fn rotation_filter_options(&self) -> IndexSet<Option<Rotation>> {
        FilterEngine::collect_rotation_values(self.session.ledger.points())
    }

    pub fn can_undo(&self) -> bool {
        self.session.ledger.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.ledger.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
