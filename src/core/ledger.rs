//! Punktliste einer Session samt Undo/Redo-Verwaltung.
//!
//! Jede Mutation wird als Aktion auf dem Undo-Stapel abgelegt. Die Stapel
//! sind optional begrenzt; beim Überlauf fällt der älteste Eintrag heraus.

use crate::core::point::ChartPoint;

/// Eine rückgängig machbare Mutation der Punktliste.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartAction {
    /// Ein Punkt wurde angehängt.
    Add(ChartPoint),
    /// Die gesamte Punktliste wurde geleert; trägt die entfernten Punkte.
    Clear(Vec<ChartPoint>),
}

/// Punktliste mit Undo/Redo-Stapeln.
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    points: Vec<ChartPoint>,
    undo_stack: Vec<ChartAction>,
    redo_stack: Vec<ChartAction>,
    /// `None` = unbegrenzte Stapeltiefe.
    max_depth: Option<usize>,
}

impl SessionLedger {
    /// Erstellt einen leeren Ledger mit optionaler Stapelbegrenzung.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Rekonstruiert einen Ledger aus geladenen Bestandteilen (Datei-Import).
    pub fn from_parts(
        points: Vec<ChartPoint>,
        undo_stack: Vec<ChartAction>,
        redo_stack: Vec<ChartAction>,
        max_depth: Option<usize>,
    ) -> Self {
        Self {
            points,
            undo_stack,
            redo_stack,
            max_depth,
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn undo_actions(&self) -> &[ChartAction] {
        &self.undo_stack
    }

    pub fn redo_actions(&self) -> &[ChartAction] {
        &self.redo_stack
    }

    /// Hängt einen Punkt an und legt die Aktion auf den Undo-Stapel.
    /// Der Redo-Stapel wird geleert. Punkte mit NaN/Inf werden abgelehnt.
    pub fn add_point(&mut self, point: ChartPoint) -> bool {
        if !point.has_finite_coords() {
            return false;
        }
        self.points.push(point.clone());
        self.push_undo(ChartAction::Add(point));
        self.redo_stack.clear();
        true
    }

    /// Leert die Punktliste und sichert die entfernten Punkte als Aktion.
    /// Gibt die Anzahl entfernter Punkte zurück; bei leerer Liste passiert
    /// nichts und es wird keine Aktion aufgezeichnet.
    pub fn clear_all(&mut self) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        let removed = std::mem::take(&mut self.points);
        let count = removed.len();
        self.push_undo(ChartAction::Clear(removed));
        self.redo_stack.clear();
        count
    }

    /// Macht die letzte Aktion rückgängig. Gibt `false` zurück wenn der
    /// Undo-Stapel leer ist.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        match &action {
            ChartAction::Add(_) => {
                if self.points.pop().is_none() {
                    // Stapel und Punktliste sind auseinandergelaufen; im
                    // Release wird der Eintrag verworfen und weitergelaufen.
                    log::error!("Undo-Stapel passt nicht zur Punktliste, Eintrag verworfen");
                    debug_assert!(false, "Add-Undo ohne zugehörigen Punkt");
                    return false;
                }
            }
            ChartAction::Clear(saved) => {
                self.points = saved.clone();
            }
        }
        self.push_redo(action);
        true
    }

    /// Wendet die zuletzt rückgängig gemachte Aktion erneut an.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };
        match &action {
            ChartAction::Add(point) => {
                self.points.push(point.clone());
            }
            ChartAction::Clear(_) => {
                self.points.clear();
            }
        }
        self.push_undo(action);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn push_undo(&mut self, action: ChartAction) {
        if let Some(limit) = self.max_depth {
            if self.undo_stack.len() >= limit {
                self.undo_stack.remove(0);
            }
        }
        self.undo_stack.push(action);
    }

    fn push_redo(&mut self, action: ChartAction) {
        if let Some(limit) = self.max_depth {
            if self.redo_stack.len() >= limit {
                self.redo_stack.remove(0);
            }
        }
        self.redo_stack.push(action);
    }
}
