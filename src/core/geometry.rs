//! Leinwand-Geometrie: Maßstab, Feldrechtecke und Koordinatenumrechnung.
//!
//! Alle Pixelwerte leiten sich aus einem einzigen Maßstab ab
//! (`canvas_size_px / grid_size_m`). Der einfache Modus zeichnet eine
//! quadratische Leinwand mit einem zentrierten Halbfeld; der Chart-Modus
//! eine hochformatige Leinwand mit zwei an der Netzlinie gespiegelten
//! Feldhälften.

use glam::Vec2;

use crate::core::session::SessionMode;
use crate::shared::options::{ChartOptions, CHART_CANVAS_HEIGHT_M};

/// Fester y-Versatz der Meter-Anzeige: 0 m liegt auf der 3-m-Referenzlinie.
pub const Y_REFERENCE_OFFSET_M: f32 = 3.0;
/// Abstand der Angriffslinie zur Netzlinie.
pub const ATTACK_LINE_OFFSET_M: f32 = 3.0;
/// Vertikaler Versatz des Halbfelds im Chart-Modus gegenüber dem
/// einfachen Modus; legt das Netz auf die halbe Leinwandhöhe.
pub const CHART_COURT_SHIFT_M: f32 = 8.0;

/// Achsenparalleles Rechteck in Pixel-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl CourtRect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Abgeleitete Leinwand-Geometrie für genau einen Modus.
#[derive(Debug, Clone, Copy)]
pub struct CourtLayout {
    mode: SessionMode,
    canvas_size_px: f32,
    grid_size_m: f32,
    inner_square_m: f32,
}

impl CourtLayout {
    pub fn new(mode: SessionMode, canvas_size_px: f32, grid_size_m: f32, inner_square_m: f32) -> Self {
        Self {
            mode,
            canvas_size_px,
            grid_size_m,
            inner_square_m,
        }
    }

    pub fn from_options(mode: SessionMode, options: &ChartOptions) -> Self {
        Self::new(
            mode,
            options.canvas_size_px,
            options.grid_size_m,
            options.inner_square_m,
        )
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Pixel pro Meter.
    pub fn scale(&self) -> f32 {
        self.canvas_size_px / self.grid_size_m
    }

    pub fn canvas_width_px(&self) -> f32 {
        self.canvas_size_px
    }

    /// Leinwandhöhe; im Chart-Modus hochformatig.
    pub fn canvas_height_px(&self) -> f32 {
        match self.mode {
            SessionMode::Simple => self.canvas_size_px,
            SessionMode::Charting => CHART_CANVAS_HEIGHT_M * self.scale(),
        }
    }

    pub fn canvas_rect(&self) -> CourtRect {
        CourtRect::new(
            Vec2::ZERO,
            Vec2::new(self.canvas_width_px(), self.canvas_height_px()),
        )
    }

    /// Seitenrand des Felds: `(grid - inner) / 2` Meter, beidseitig.
    pub fn court_margin_px(&self) -> f32 {
        (self.grid_size_m - self.inner_square_m) * 0.5 * self.scale()
    }

    /// Halbfeld im einfachen Modus; das Netz liegt auf der Oberkante.
    pub fn simple_court_rect(&self) -> CourtRect {
        let margin = self.court_margin_px();
        let side = self.inner_square_m * self.scale();
        CourtRect::new(
            Vec2::new(margin, margin),
            Vec2::new(margin + side, margin + side),
        )
    }

    /// Unteres (eigenes) Halbfeld im Chart-Modus: das einfache Halbfeld,
    /// vertikal um [`CHART_COURT_SHIFT_M`] verschoben.
    pub fn lower_court_rect(&self) -> CourtRect {
        let base = self.simple_court_rect();
        let shift = CHART_COURT_SHIFT_M * self.scale();
        CourtRect::new(
            base.min + Vec2::new(0.0, shift),
            base.max + Vec2::new(0.0, shift),
        )
    }

    /// Oberes (gegnerisches) Halbfeld: Spiegelung des unteren an der Netzlinie.
    pub fn upper_court_rect(&self) -> CourtRect {
        let lower = self.lower_court_rect();
        let net_y = lower.min.y;
        CourtRect::new(
            Vec2::new(lower.min.x, net_y - lower.height()),
            Vec2::new(lower.max.x, net_y),
        )
    }

    /// y-Koordinate der Netzlinie.
    pub fn net_y_px(&self) -> f32 {
        match self.mode {
            SessionMode::Simple => self.simple_court_rect().min.y,
            SessionMode::Charting => self.lower_court_rect().min.y,
        }
    }

    /// y-Koordinaten der Angriffslinien (3 m vom Netz, pro Feldhälfte eine).
    pub fn attack_line_ys_px(&self) -> Vec<f32> {
        let offset = ATTACK_LINE_OFFSET_M * self.scale();
        match self.mode {
            SessionMode::Simple => vec![self.net_y_px() + offset],
            SessionMode::Charting => {
                let net = self.net_y_px();
                vec![net - offset, net + offset]
            }
        }
    }

    /// Rechnet Pixel- in Meterkoordinaten um. Der y-Nullpunkt liegt fest
    /// auf der 3-m-Referenzlinie, unabhängig vom Modus.
    pub fn pixels_to_meters(&self, px: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(px.x / scale, px.y / scale - Y_REFERENCE_OFFSET_M)
    }

    /// Umkehrung von [`Self::pixels_to_meters`].
    pub fn meters_to_pixels(&self, m: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(m.x * scale, (m.y + Y_REFERENCE_OFFSET_M) * scale)
    }

    /// Prüft ob eine Pixelposition auf der Leinwand liegt (Ränder inklusive).
    pub fn is_within_bounds(&self, px: Vec2) -> bool {
        self.canvas_rect().contains(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout(mode: SessionMode) -> CourtLayout {
        CourtLayout::new(mode, 600.0, 15.0, 9.0)
    }

    #[test]
    fn scale_is_forty_for_default_dimensions() {
        assert_relative_eq!(layout(SessionMode::Simple).scale(), 40.0);
        assert_relative_eq!(layout(SessionMode::Charting).scale(), 40.0);
    }

    #[test]
    fn pixels_to_meters_reference_point() {
        let l = layout(SessionMode::Simple);
        let m = l.pixels_to_meters(Vec2::new(120.0, 120.0));
        assert_relative_eq!(m.x, 3.0);
        assert_relative_eq!(m.y, 0.0);
    }

    #[test]
    fn meter_offset_is_mode_independent() {
        let simple = layout(SessionMode::Simple);
        let charting = layout(SessionMode::Charting);
        let px = Vec2::new(260.0, 500.0);
        assert_eq!(simple.pixels_to_meters(px), charting.pixels_to_meters(px));
    }

    #[test]
    fn meters_pixels_roundtrip() {
        let l = layout(SessionMode::Charting);
        let px = Vec2::new(333.0, 617.0);
        let back = l.meters_to_pixels(l.pixels_to_meters(px));
        assert_relative_eq!(back.x, px.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, px.y, epsilon = 1e-3);
    }

    #[test]
    fn simple_mode_court_numbers() {
        let l = layout(SessionMode::Simple);
        assert_relative_eq!(l.canvas_height_px(), 600.0);
        let court = l.simple_court_rect();
        assert_relative_eq!(court.min.x, 120.0);
        assert_relative_eq!(court.min.y, 120.0);
        assert_relative_eq!(court.max.x, 480.0);
        assert_relative_eq!(court.max.y, 480.0);
        assert_eq!(l.attack_line_ys_px(), vec![240.0]);
    }

    #[test]
    fn charting_canvas_is_twenty_two_meters_tall() {
        let l = layout(SessionMode::Charting);
        assert_relative_eq!(l.canvas_height_px(), 880.0);
        assert_relative_eq!(l.canvas_width_px(), 600.0);
    }

    #[test]
    fn charting_halves_mirror_about_net() {
        let l = layout(SessionMode::Charting);
        let lower = l.lower_court_rect();
        let upper = l.upper_court_rect();

        assert_relative_eq!(l.net_y_px(), 440.0);
        assert_relative_eq!(lower.min.y, 440.0);
        assert_relative_eq!(lower.max.y, 800.0);
        assert_relative_eq!(upper.min.y, 80.0);
        assert_relative_eq!(upper.max.y, 440.0);
        // Gleiche Breite, gleiche Höhe, gemeinsame Netzkante.
        assert_relative_eq!(lower.width(), 360.0);
        assert_relative_eq!(lower.height(), upper.height());
        assert_relative_eq!(lower.min.x, upper.min.x);
        assert_relative_eq!(lower.max.x, upper.max.x);
    }

    #[test]
    fn charting_attack_lines_sit_three_meters_from_net() {
        let l = layout(SessionMode::Charting);
        assert_eq!(l.attack_line_ys_px(), vec![320.0, 560.0]);
    }

    #[test]
    fn bounds_are_inclusive_on_edges() {
        let l = layout(SessionMode::Charting);
        assert!(l.is_within_bounds(Vec2::new(0.0, 0.0)));
        assert!(l.is_within_bounds(Vec2::new(600.0, 880.0)));
        assert!(!l.is_within_bounds(Vec2::new(600.1, 0.0)));
        assert!(!l.is_within_bounds(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn bounds_respect_mode_height() {
        let simple = layout(SessionMode::Simple);
        let charting = layout(SessionMode::Charting);
        let p = Vec2::new(300.0, 700.0);
        assert!(!simple.is_within_bounds(p));
        assert!(charting.is_within_bounds(p));
    }
}
