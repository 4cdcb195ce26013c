//! Leaf-Datentypen für Chart-Beobachtungen: Punkte, Linien, Rotation, Team.

use glam::Vec2;

/// Rotation 1–6 (Läufersystem). Ungültige Werte sind nicht konstruierbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rotation(u8);

impl Rotation {
    /// Erstellt eine Rotation, sofern der Wert in 1..=6 liegt.
    pub fn new(value: u8) -> Option<Self> {
        (1..=6).contains(&value).then_some(Self(value))
    }

    /// Gibt den Rohwert (1..=6) zurück.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team-Zuordnung eines gecharteten Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    /// Eigenes Team
    Us,
    /// Gegner
    Opp,
}

/// Gerichtetes Liniensegment (z.B. Aufschlag von Start nach Ziel), Pixel-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLine {
    /// Startpunkt des Segments
    pub start: Vec2,
    /// Endpunkt des Segments
    pub end: Vec2,
}

impl ChartLine {
    /// Erstellt ein neues Liniensegment.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Mittelpunkt des Segments (für Label-Platzierung).
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

/// Eine einzelne Beobachtung auf dem Spielfeld.
///
/// Ein Punkt mit `line` ist ein "gecharteter" Punkt (Drag-Geste);
/// `jersey_number` und `team` sind nur auf gecharteten Punkten sinnvoll.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Wolken-Position in Pixel-Koordinaten
    pub position: Vec2,
    /// Rotation zum Zeitpunkt der Beobachtung (optional)
    pub rotation: Option<Rotation>,
    /// Trikotnummer ("0".."99", optional)
    pub jersey_number: Option<String>,
    /// Team-Zuordnung (optional)
    pub team: Option<Team>,
    /// Liniensegment bei Drag-Beobachtungen (optional)
    pub line: Option<ChartLine>,
}

impl ChartPoint {
    /// Erstellt einen einfachen Wolken-Punkt (Click-Geste).
    pub fn new(position: Vec2, rotation: Option<Rotation>) -> Self {
        Self {
            position,
            rotation,
            jersey_number: None,
            team: None,
            line: None,
        }
    }

    /// Erstellt einen gecharteten Punkt mit Liniensegment und Tags.
    pub fn charted(
        position: Vec2,
        line: ChartLine,
        rotation: Option<Rotation>,
        jersey_number: Option<String>,
        team: Option<Team>,
    ) -> Self {
        Self {
            position,
            rotation,
            jersey_number,
            team,
            line: Some(line),
        }
    }

    /// Prüft ob der Punkt ein Liniensegment trägt.
    pub fn is_charted(&self) -> bool {
        self.line.is_some()
    }

    /// Prüft ob alle Koordinaten endlich sind (kein NaN/Inf).
    pub fn has_finite_coords(&self) -> bool {
        let pos_ok = self.position.x.is_finite() && self.position.y.is_finite();
        let line_ok = self.line.map_or(true, |l| {
            l.start.x.is_finite()
                && l.start.y.is_finite()
                && l.end.x.is_finite()
                && l.end.y.is_finite()
        });
        pos_ok && line_ok
    }
}

/// Prüft ob ein String eine gültige Trikotnummer ist (0..=99, nur Ziffern).
pub fn is_valid_jersey(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 2
        && value.chars().all(|c| c.is_ascii_digit())
}
