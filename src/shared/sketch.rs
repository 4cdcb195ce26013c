//! Zeichen-Schnittstelle zwischen Kernlogik und einbettender Oberfläche.
//!
//! Der Editor kennt kein konkretes Render-Backend. Stattdessen beschreibt
//! [`sketch_session`] eine Szene als Folge von Zeichenaufrufen gegen
//! [`SketchTarget`]; die Oberfläche (egui, Canvas, SVG-Export, ...)
//! implementiert das Trait. [`RecordingTarget`] sammelt die Aufrufe als
//! Werte und dient Tests und Szenen-Caching.

use glam::Vec2;

use crate::core::filter::FilterEngine;
use crate::core::geometry::{CourtLayout, CourtRect};
use crate::core::point::{ChartPoint, Team};
use crate::core::session::SessionMode;

/// Radius der Wolken-Markierung für Click-Punkte.
pub const CLOUD_RADIUS_PX: f32 = 9.0;
/// Radius des Einschlag-Punkts am Linienende.
pub const DOT_RADIUS_PX: f32 = 4.0;
/// Abstand des Trikot-Labels zur Linienmitte.
pub const LABEL_OFFSET_PX: f32 = 10.0;

/// Semantische Linienart; das Backend wählt Strichstärke und Muster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Feldumrandung
    Court,
    /// Netzlinie (typisch gestrichelt)
    Net,
    /// Angriffslinie
    Attack,
    /// Verlängerung der Angriffslinie bis zum Leinwandrand
    AttackExtension,
    /// Gechartetes Liniensegment einer Beobachtung
    Charted,
}

/// Einfärbung von Punktmarkierungen nach Team-Zuordnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Neutral,
    Us,
    Opp,
}

impl Tint {
    fn from_team(team: Option<Team>) -> Self {
        match team {
            None => Tint::Neutral,
            Some(Team::Us) => Tint::Us,
            Some(Team::Opp) => Tint::Opp,
        }
    }
}

/// Zeichenaufrufe, die ein Backend umsetzen muss.
pub trait SketchTarget {
    /// Leert die Leinwand.
    fn clear(&mut self);
    /// Wolken-Markierung eines Click-Punkts.
    fn draw_cloud(&mut self, center: Vec2, radius: f32, tint: Tint);
    /// Kompakter Punkt (z.B. Einschlagstelle am Linienende).
    fn draw_dot(&mut self, center: Vec2, radius: f32, tint: Tint);
    /// Liniensegment.
    fn draw_line(&mut self, from: Vec2, to: Vec2, kind: LineKind);
    /// Textlabel an einer Ankerposition.
    fn draw_label(&mut self, anchor: Vec2, text: &str);
}

/// Ein aufgezeichneter Zeichenaufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchOp {
    Clear,
    Cloud { center: Vec2, radius: f32, tint: Tint },
    Dot { center: Vec2, radius: f32, tint: Tint },
    Line { from: Vec2, to: Vec2, kind: LineKind },
    Label { anchor: Vec2, text: String },
}

/// Sammelt Zeichenaufrufe als Werte statt sie auszuführen.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub ops: Vec<SketchOp>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spielt die aufgezeichnete Szene gegen ein echtes Backend ab.
    pub fn replay(&self, target: &mut dyn SketchTarget) {
        for op in &self.ops {
            match op {
                SketchOp::Clear => target.clear(),
                SketchOp::Cloud { center, radius, tint } => {
                    target.draw_cloud(*center, *radius, *tint)
                }
                SketchOp::Dot { center, radius, tint } => target.draw_dot(*center, *radius, *tint),
                SketchOp::Line { from, to, kind } => target.draw_line(*from, *to, *kind),
                SketchOp::Label { anchor, text } => target.draw_label(*anchor, text),
            }
        }
    }
}

impl SketchTarget for RecordingTarget {
    fn clear(&mut self) {
        self.ops.push(SketchOp::Clear);
    }

    fn draw_cloud(&mut self, center: Vec2, radius: f32, tint: Tint) {
        self.ops.push(SketchOp::Cloud { center, radius, tint });
    }

    fn draw_dot(&mut self, center: Vec2, radius: f32, tint: Tint) {
        self.ops.push(SketchOp::Dot { center, radius, tint });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, kind: LineKind) {
        self.ops.push(SketchOp::Line { from, to, kind });
    }

    fn draw_label(&mut self, anchor: Vec2, text: &str) {
        self.ops.push(SketchOp::Label {
            anchor,
            text: text.to_string(),
        });
    }
}

// ── Szenenaufbau ─────────────────────────────────────────────────────────────

/// Zeichnet die komplette Szene: Leinwand leeren, Feld, dann alle Punkte,
/// die den Filter passieren.
pub fn sketch_session(
    target: &mut dyn SketchTarget,
    layout: &CourtLayout,
    points: &[ChartPoint],
    filter: &FilterEngine,
) {
    target.clear();
    sketch_court(target, layout);
    for point in filter.apply(points) {
        sketch_point(target, point);
    }
}

/// Zeichnet nur das Spielfeld (Umrandung, Netz, Angriffslinien).
pub fn sketch_court(target: &mut dyn SketchTarget, layout: &CourtLayout) {
    match layout.mode() {
        SessionMode::Simple => sketch_simple_court(target, layout),
        SessionMode::Charting => sketch_charting_court(target, layout),
    }
}

fn sketch_simple_court(target: &mut dyn SketchTarget, layout: &CourtLayout) {
    let court = layout.simple_court_rect();
    sketch_rect_sides(target, &court, true);
    // Netz auf der Oberkante, darüber gezeichnet damit das Backend es
    // abweichend stylen kann.
    let net_y = layout.net_y_px();
    target.draw_line(
        Vec2::new(court.min.x, net_y),
        Vec2::new(court.max.x, net_y),
        LineKind::Net,
    );
    for y in layout.attack_line_ys_px() {
        target.draw_line(
            Vec2::new(court.min.x, y),
            Vec2::new(court.max.x, y),
            LineKind::Attack,
        );
    }
}

fn sketch_charting_court(target: &mut dyn SketchTarget, layout: &CourtLayout) {
    let lower = layout.lower_court_rect();
    let upper = layout.upper_court_rect();
    let net_y = layout.net_y_px();

    // Beide Hälften ohne die gemeinsame Netzkante, die folgt separat.
    sketch_rect_sides(target, &upper, false);
    target.draw_line(
        Vec2::new(upper.min.x, upper.min.y),
        Vec2::new(upper.max.x, upper.min.y),
        LineKind::Court,
    );
    sketch_rect_sides(target, &lower, false);
    target.draw_line(
        Vec2::new(lower.min.x, lower.max.y),
        Vec2::new(lower.max.x, lower.max.y),
        LineKind::Court,
    );
    target.draw_line(
        Vec2::new(lower.min.x, net_y),
        Vec2::new(lower.max.x, net_y),
        LineKind::Net,
    );

    for y in layout.attack_line_ys_px() {
        target.draw_line(
            Vec2::new(lower.min.x, y),
            Vec2::new(lower.max.x, y),
            LineKind::Attack,
        );
        // Verlängerungen bis zu den Leinwandrändern.
        target.draw_line(
            Vec2::new(0.0, y),
            Vec2::new(lower.min.x, y),
            LineKind::AttackExtension,
        );
        target.draw_line(
            Vec2::new(lower.max.x, y),
            Vec2::new(layout.canvas_width_px(), y),
            LineKind::AttackExtension,
        );
    }
}

/// Zeichnet die Seiten eines Rechtecks; `with_horizontals` steuert ob
/// Ober- und Unterkante mitgezeichnet werden.
fn sketch_rect_sides(target: &mut dyn SketchTarget, rect: &CourtRect, with_horizontals: bool) {
    let top_left = rect.min;
    let top_right = Vec2::new(rect.max.x, rect.min.y);
    let bottom_left = Vec2::new(rect.min.x, rect.max.y);
    let bottom_right = rect.max;

    target.draw_line(top_left, bottom_left, LineKind::Court);
    target.draw_line(top_right, bottom_right, LineKind::Court);
    if with_horizontals {
        target.draw_line(top_left, top_right, LineKind::Court);
        target.draw_line(bottom_left, bottom_right, LineKind::Court);
    }
}

fn sketch_point(target: &mut dyn SketchTarget, point: &ChartPoint) {
    let tint = Tint::from_team(point.team);
    match point.line {
        None => target.draw_cloud(point.position, CLOUD_RADIUS_PX, tint),
        Some(line) => {
            target.draw_line(line.start, line.end, LineKind::Charted);
            target.draw_dot(line.end, DOT_RADIUS_PX, tint);
            if let Some(jersey) = &point.jersey_number {
                let anchor = line.midpoint() + Vec2::new(LABEL_OFFSET_PX, -LABEL_OFFSET_PX);
                target.draw_label(anchor, jersey);
            }
        }
    }
}
