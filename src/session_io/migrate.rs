//! Schema-Migration älterer Session-Dokumente.
//!
//! Gechartete Punkte aus Altbeständen kennen `jerseyNumber` und `team`
//! noch nicht. Die Migration ergänzt fehlende Felder als explizites
//! `null` — in der Punktliste wie in beiden Stapeln — und zählt je
//! Sammlung, was ergänzt wurde. Wolken-Punkte ohne Liniensegment tragen
//! diese Felder nicht und bleiben unangetastet. Bereits vorhandene
//! `null`-Felder zählen nicht, dadurch ist die Migration beliebig
//! wiederholbar.

use crate::session_io::document::{ActionDto, PointDto, SessionDocument, DOCUMENT_VERSION};

/// Zählwerk einer Migration, je Feld und Sammlung getrennt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub jersey_in_points: usize,
    pub jersey_in_undo: usize,
    pub jersey_in_redo: usize,
    pub team_in_points: usize,
    pub team_in_undo: usize,
    pub team_in_redo: usize,
}

impl MigrationReport {
    /// Gesamtzahl migrierter Punkte: die Summe der ergänzten Trikot-Felder
    /// über Punktliste, Undo- und Redo-Stapel.
    pub fn total_migrated(&self) -> usize {
        self.jersey_in_points + self.jersey_in_undo + self.jersey_in_redo
    }

    pub fn had_changes(&self) -> bool {
        self.total_migrated() > 0
            || self.team_in_points + self.team_in_undo + self.team_in_redo > 0
    }

    /// Menschlich lesbare Zusammenfassung; `None` wenn nichts zu tun war.
    pub fn summary(&self) -> Option<String> {
        if !self.had_changes() {
            return None;
        }
        Some(format!(
            "Migration: {} Punkt(e) ergänzt (Trikot {}+{}+{}, Team {}+{}+{})",
            self.total_migrated(),
            self.jersey_in_points,
            self.jersey_in_undo,
            self.jersey_in_redo,
            self.team_in_points,
            self.team_in_undo,
            self.team_in_redo,
        ))
    }
}

/// Hebt ein Dokument auf die aktuelle Schema-Version und ergänzt fehlende
/// Felder gecharteter Punkte. Gibt das Zählwerk der Änderungen zurück.
pub fn migrate_document(doc: &mut SessionDocument) -> MigrationReport {
    let mut report = MigrationReport::default();

    (report.jersey_in_points, report.team_in_points) = backfill(doc.points.iter_mut());
    (report.jersey_in_undo, report.team_in_undo) = backfill(stack_points_mut(&mut doc.undo_stack));
    (report.jersey_in_redo, report.team_in_redo) = backfill(stack_points_mut(&mut doc.redo_stack));

    doc.version = Some(DOCUMENT_VERSION.to_string());
    report
}

fn backfill<'a>(points: impl Iterator<Item = &'a mut PointDto>) -> (usize, usize) {
    let mut jersey = 0;
    let mut team = 0;
    for point in points {
        // Nur gechartete Punkte tragen Trikot und Team.
        if point.line.is_none() {
            continue;
        }
        if point.jersey_number.is_none() {
            point.jersey_number = Some(None);
            jersey += 1;
        }
        if point.team.is_none() {
            point.team = Some(None);
            team += 1;
        }
    }
    (jersey, team)
}

fn stack_points_mut(stack: &mut [ActionDto]) -> impl Iterator<Item = &mut PointDto> {
    stack.iter_mut().flat_map(|action| match action {
        ActionDto::Add { point } => std::slice::from_mut(point).iter_mut(),
        ActionDto::Clear { points } => points.iter_mut(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_io::document::decode_document;

    fn legacy_doc() -> SessionDocument {
        decode_document(
            r#"{
                "name": "alt",
                "mode": "charting",
                "points": [
                    {"x": 1.0, "y": 1.0, "rotation": 1,
                     "line": {"startX": 0.0, "startY": 0.0, "endX": 1.0, "endY": 1.0}},
                    {"x": 2.0, "y": 2.0, "jerseyNumber": null,
                     "line": {"startX": 0.0, "startY": 0.0, "endX": 2.0, "endY": 2.0}},
                    {"x": 9.0, "y": 9.0}
                ],
                "undoStack": [
                    {"action": "add", "point": {"x": 3.0, "y": 3.0,
                     "line": {"startX": 0.0, "startY": 0.0, "endX": 3.0, "endY": 3.0}}},
                    {"action": "clear", "points": [
                        {"x": 4.0, "y": 4.0,
                         "line": {"startX": 0.0, "startY": 0.0, "endX": 4.0, "endY": 4.0}},
                        {"x": 5.0, "y": 5.0}
                    ]}
                ],
                "redoStack": [
                    {"action": "add", "point": {"x": 6.0, "y": 6.0, "team": null,
                     "line": {"startX": 0.0, "startY": 0.0, "endX": 6.0, "endY": 6.0}}}
                ]
            }"#,
        )
        .expect("Legacy-Dokument muss wohlgeformt sein")
    }

    #[test]
    fn backfills_missing_fields_of_charted_points_in_all_collections() {
        let mut doc = legacy_doc();
        let report = migrate_document(&mut doc);

        // Punkt 2 hatte jerseyNumber bereits als null, zählt also nicht;
        // Punkt 3 ist ein Wolken-Punkt und bleibt außen vor.
        assert_eq!(report.jersey_in_points, 1);
        assert_eq!(report.team_in_points, 2);
        assert_eq!(report.jersey_in_undo, 2);
        assert_eq!(report.team_in_undo, 2);
        assert_eq!(report.jersey_in_redo, 1);
        assert_eq!(report.team_in_redo, 0);

        assert!(doc
            .points
            .iter()
            .filter(|p| p.line.is_some())
            .all(|p| p.jersey_number.is_some()));
        assert_eq!(doc.version.as_deref(), Some(DOCUMENT_VERSION));
    }

    #[test]
    fn total_is_the_sum_of_jersey_counts() {
        let mut doc = legacy_doc();
        let report = migrate_document(&mut doc);
        assert_eq!(report.total_migrated(), 1 + 2 + 1);
    }

    #[test]
    fn cloud_points_are_left_untouched() {
        let mut doc = decode_document(
            r#"{"name":"alt","mode":"simple",
                "points":[{"x":1.0,"y":1.0},{"x":2.0,"y":2.0,"rotation":4}],
                "undoStack":[{"action":"add","point":{"x":1.0,"y":1.0}}]}"#,
        )
        .expect("Legacy-Dokument muss wohlgeformt sein");

        let report = migrate_document(&mut doc);
        assert_eq!(report.total_migrated(), 0);
        assert!(!report.had_changes());
        assert!(report.summary().is_none());
        // Die Felder werden auch nicht als explizites null ergänzt.
        assert!(doc.points.iter().all(|p| p.jersey_number.is_none()));
        assert!(doc.points.iter().all(|p| p.team.is_none()));
    }

    #[test]
    fn migration_is_idempotent() {
        let mut doc = legacy_doc();
        let first = migrate_document(&mut doc);
        assert!(first.had_changes());

        let second = migrate_document(&mut doc);
        assert!(!second.had_changes());
        assert_eq!(second.total_migrated(), 0);
        assert!(second.summary().is_none());
    }

    #[test]
    fn summary_reports_counts_in_order() {
        let mut doc = legacy_doc();
        let report = migrate_document(&mut doc);
        let summary = report.summary().expect("es wurde migriert");
        assert!(summary.contains("4 Punkt(e)"));
        assert!(summary.contains("Trikot 1+2+1"));
    }

    #[test]
    fn current_document_is_left_untouched() {
        let mut doc = decode_document(
            r#"{"version":"2","name":"neu","mode":"charting",
                "points":[{"x":1.0,"y":1.0,"jerseyNumber":"7","team":"us"}]}"#,
        )
        .expect("Dokument muss wohlgeformt sein");
        let before = doc.clone();
        let report = migrate_document(&mut doc);
        assert!(!report.had_changes());
        assert_eq!(doc, before);
    }
}
