//! Sichtbarkeitsfilter über Trikotnummern und Rotationen.
//!
//! Beide Dimensionen sind Mehrfachauswahlen: innerhalb einer Dimension
//! gilt ODER, zwischen den Dimensionen UND. Eine leere Auswahl lässt die
//! jeweilige Dimension alles passieren. `None` steht für Punkte ohne
//! Trikotnummer bzw. ohne Rotation; eine Trikotnummer zählt nur auf
//! gecharteten Punkten, Wolken-Punkte fallen immer in den
//! "ohne Trikot"-Eimer.

use indexmap::IndexSet;

use crate::core::point::{ChartPoint, Rotation};

/// Aktive Filterauswahl; Einfügereihenfolge bleibt für die UI erhalten.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    jerseys: IndexSet<Option<String>>,
    rotations: IndexSet<Option<Rotation>>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jersey_filter(&self) -> &IndexSet<Option<String>> {
        &self.jerseys
    }

    pub fn rotation_filter(&self) -> &IndexSet<Option<Rotation>> {
        &self.rotations
    }

    /// Mindestens eine Dimension schränkt ein.
    pub fn is_active(&self) -> bool {
        !self.jerseys.is_empty() || !self.rotations.is_empty()
    }

    /// Schaltet einen Trikot-Eintrag um. Gibt zurück ob er danach aktiv ist.
    pub fn toggle_jersey(&mut self, jersey: Option<String>) -> bool {
        if self.jerseys.shift_remove(&jersey) {
            false
        } else {
            self.jerseys.insert(jersey);
            true
        }
    }

    /// Schaltet einen Rotations-Eintrag um. Gibt zurück ob er danach aktiv ist.
    pub fn toggle_rotation(&mut self, rotation: Option<Rotation>) -> bool {
        if self.rotations.shift_remove(&rotation) {
            false
        } else {
            self.rotations.insert(rotation);
            true
        }
    }

    pub fn clear_jerseys(&mut self) {
        self.jerseys.clear();
    }

    pub fn clear_rotations(&mut self) {
        self.rotations.clear();
    }

    pub fn clear_all(&mut self) {
        self.jerseys.clear();
        self.rotations.clear();
    }

    /// Nimmt die neue aktuelle Rotation in den Filter auf, falls gerade ein
    /// Rotationsfilter aktiv ist. So bleiben frisch erfasste Punkte sichtbar,
    /// ohne dass der Filter manuell nachgezogen werden muss.
    pub fn auto_include_rotation(&mut self, rotation: Option<Rotation>) {
        if !self.rotations.is_empty() {
            self.rotations.insert(rotation);
        }
    }

    /// Prüft ob ein Punkt die aktuelle Auswahl passiert.
    pub fn is_visible(&self, point: &ChartPoint) -> bool {
        let jersey_ok =
            self.jerseys.is_empty() || self.jerseys.contains(&effective_jersey(point));
        let rotation_ok = self.rotations.is_empty() || self.rotations.contains(&point.rotation);
        jersey_ok && rotation_ok
    }

    /// Liefert nur die sichtbaren Punkte einer Liste.
    pub fn apply<'a>(&'a self, points: &'a [ChartPoint]) -> impl Iterator<Item = &'a ChartPoint> {
        points.iter().filter(|p| self.is_visible(p))
    }

    /// Sammelt die in den Punkten vorkommenden Trikotnummern in
    /// Erst-Auftretens-Reihenfolge (inkl. `None` für ungetaggte Punkte).
    pub fn collect_jersey_values(points: &[ChartPoint]) -> IndexSet<Option<String>> {
        points.iter().map(effective_jersey).collect()
    }

    /// Sammelt die in den Punkten vorkommenden Rotationen in
    /// Erst-Auftretens-Reihenfolge.
    pub fn collect_rotation_values(points: &[ChartPoint]) -> IndexSet<Option<Rotation>> {
        points.iter().map(|p| p.rotation).collect()
    }
}

/// Wirksame Trikotnummer eines Punkts: nur gechartete Punkte tragen eine.
fn effective_jersey(point: &ChartPoint) -> Option<String> {
    if point.is_charted() {
        point.jersey_number.clone()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::point::ChartLine;
    use glam::Vec2;

    /// Punkt mit Trikotnummer ist gechartet (trägt ein Liniensegment),
    /// Punkt ohne ist ein Wolken-Punkt.
    fn tagged(jersey: Option<&str>, rotation: Option<u8>) -> ChartPoint {
        let position = Vec2::new(10.0, 10.0);
        match jersey {
            Some(number) => ChartPoint::charted(
                position,
                ChartLine::new(Vec2::new(0.0, 0.0), position),
                rotation.and_then(Rotation::new),
                Some(number.to_string()),
                None,
            ),
            None => ChartPoint::new(position, rotation.and_then(Rotation::new)),
        }
    }

    #[test]
    fn empty_filter_passes_everything() {
        let filter = FilterEngine::new();
        assert!(!filter.is_active());
        assert!(filter.is_visible(&tagged(Some("7"), Some(3))));
        assert!(filter.is_visible(&tagged(None, None)));
    }

    #[test]
    fn within_dimension_is_or() {
        let mut filter = FilterEngine::new();
        filter.toggle_jersey(Some("5".to_string()));
        filter.toggle_jersey(Some("7".to_string()));
        assert!(filter.is_visible(&tagged(Some("5"), None)));
        assert!(filter.is_visible(&tagged(Some("7"), Some(2))));
        assert!(!filter.is_visible(&tagged(Some("9"), None)));
    }

    #[test]
    fn across_dimensions_is_and() {
        let mut filter = FilterEngine::new();
        filter.toggle_jersey(Some("5".to_string()));
        filter.toggle_rotation(Rotation::new(3));
        assert!(filter.is_visible(&tagged(Some("5"), Some(3))));
        assert!(!filter.is_visible(&tagged(Some("5"), Some(4))));
        assert!(!filter.is_visible(&tagged(Some("7"), Some(3))));
    }

    #[test]
    fn none_entry_matches_untagged_points() {
        let mut filter = FilterEngine::new();
        filter.toggle_jersey(None);
        assert!(filter.is_visible(&tagged(None, Some(1))));
        assert!(!filter.is_visible(&tagged(Some("5"), Some(1))));
    }

    #[test]
    fn jersey_on_cloud_point_counts_as_untagged() {
        // Eine Trikotnummer zählt nur auf gecharteten Punkten; ein
        // Wolken-Punkt, der (z.B. aus einer Datei) eine trägt, fällt in
        // den "ohne Trikot"-Eimer.
        let mut cloud = ChartPoint::new(Vec2::new(10.0, 10.0), None);
        cloud.jersey_number = Some("7".to_string());

        let mut filter = FilterEngine::new();
        filter.toggle_jersey(Some("7".to_string()));
        assert!(!filter.is_visible(&cloud));

        filter.clear_jerseys();
        filter.toggle_jersey(None);
        assert!(filter.is_visible(&cloud));

        // Auch die Filterauswahl bietet für ihn nur den None-Eintrag an.
        let values: Vec<_> = FilterEngine::collect_jersey_values(std::slice::from_ref(&cloud))
            .into_iter()
            .collect();
        assert_eq!(values, vec![None]);
    }

    #[test]
    fn toggle_removes_and_preserves_order() {
        let mut filter = FilterEngine::new();
        assert!(filter.toggle_jersey(Some("5".to_string())));
        assert!(filter.toggle_jersey(None));
        assert!(filter.toggle_jersey(Some("7".to_string())));
        assert!(!filter.toggle_jersey(None));

        let remaining: Vec<_> = filter.jersey_filter().iter().cloned().collect();
        assert_eq!(remaining, vec![Some("5".to_string()), Some("7".to_string())]);
    }

    #[test]
    fn double_toggle_restores_the_set() {
        let mut filter = FilterEngine::new();
        filter.toggle_rotation(Rotation::new(2));
        let before: Vec<_> = filter.rotation_filter().iter().cloned().collect();

        filter.toggle_rotation(Rotation::new(5));
        filter.toggle_rotation(Rotation::new(5));

        let after: Vec<_> = filter.rotation_filter().iter().cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn removing_last_entry_deactivates_dimension() {
        let mut filter = FilterEngine::new();
        filter.toggle_rotation(Rotation::new(2));
        assert!(!filter.is_visible(&tagged(None, Some(5))));
        filter.toggle_rotation(Rotation::new(2));
        assert!(filter.is_visible(&tagged(None, Some(5))));
    }

    #[test]
    fn active_rotation_filter_absorbs_new_current_rotation() {
        let mut filter = FilterEngine::new();
        filter.toggle_rotation(Rotation::new(2));
        filter.auto_include_rotation(Rotation::new(4));

        let selected: Vec<_> = filter.rotation_filter().iter().copied().collect();
        assert_eq!(selected, vec![Rotation::new(2), Rotation::new(4)]);
    }

    #[test]
    fn inactive_rotation_filter_stays_empty_on_rotation_change() {
        let mut filter = FilterEngine::new();
        filter.auto_include_rotation(Rotation::new(4));
        assert!(filter.rotation_filter().is_empty());
        assert!(!filter.is_active());
    }

    #[test]
    fn clear_all_resets_both_dimensions() {
        let mut filter = FilterEngine::new();
        filter.toggle_jersey(Some("5".to_string()));
        filter.toggle_rotation(Rotation::new(1));
        filter.clear_all();
        assert!(!filter.is_active());
    }

    #[test]
    fn collects_values_in_first_seen_order() {
        let points = vec![
            tagged(Some("7"), Some(1)),
            tagged(None, Some(1)),
            tagged(Some("7"), Some(4)),
            tagged(Some("2"), None),
        ];
        let jerseys: Vec<_> = FilterEngine::collect_jersey_values(&points)
            .into_iter()
            .collect();
        assert_eq!(
            jerseys,
            vec![Some("7".to_string()), None, Some("2".to_string())]
        );
        let rotations: Vec<_> = FilterEngine::collect_rotation_values(&points)
            .into_iter()
            .collect();
        assert_eq!(rotations, vec![Rotation::new(1), Rotation::new(4), None]);
    }
}
