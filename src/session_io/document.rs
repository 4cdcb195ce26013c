//! Wire-Format der Session-Dateien (JSON) und die Abbildung von und zu den
//! Kerntypen.
//!
//! Die DTO-Schicht ist bewusst nachsichtig: Felder wie `version` oder die
//! Stapel dürfen fehlen (Altbestand), der Modus bleibt hier ein roher
//! String. Die strengen Regeln wohnen in [`crate::session_io::validate`].
//!
//! Für `jerseyNumber` und `team` wird zwischen *fehlendem* Feld und
//! explizitem `null` unterschieden (doppeltes `Option`): die Migration
//! zählt nur tatsächlich fehlende Felder.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::core::ledger::{ChartAction, SessionLedger};
use crate::core::point::{ChartLine, ChartPoint, Rotation, Team};
use crate::core::session::{sanitize_session_name, Session, SessionMode};
use crate::session_io::error::SessionIoError;

/// Aktuelle Schema-Version geschriebener Dokumente. Im Dateiformat ist die
/// Version eine Zeichenkette.
pub const DOCUMENT_VERSION: &str = "2";

// ── DTOs ─────────────────────────────────────────────────────────────────────

/// Liniensegment im Dateiformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// Ein Punkt im Dateiformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: Option<i64>,
    /// Äußeres `None` = Feld fehlt, `Some(None)` = explizites `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_maybe_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub jersey_number: Option<Option<String>>,
    /// Äußeres `None` = Feld fehlt, `Some(None)` = explizites `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_maybe_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub team: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineDto>,
}

/// Ein Undo/Redo-Eintrag im Dateiformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ActionDto {
    Add { point: PointDto },
    Clear { points: Vec<PointDto> },
}

/// Eine komplette Session-Datei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub name: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub points: Vec<PointDto>,
    #[serde(default)]
    pub undo_stack: Vec<ActionDto>,
    #[serde(default)]
    pub redo_stack: Vec<ActionDto>,
}

/// Hebt ein vorhandenes Feld (auch `null`) auf `Some(..)`; fehlende Felder
/// bleiben über `#[serde(default)]` beim äußeren `None`.
fn deserialize_maybe_absent<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ── Kodierung ────────────────────────────────────────────────────────────────

/// Liest ein Dokument aus einem JSON-String.
pub fn decode_document(json: &str) -> Result<SessionDocument, SessionIoError> {
    Ok(serde_json::from_str(json)?)
}

/// Schreibt ein Dokument als eingerücktes JSON.
pub fn encode_document(doc: &SessionDocument) -> Result<String, SessionIoError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Aktueller UTC-Zeitstempel im RFC-3339-Format.
pub fn rfc3339_now() -> Option<String> {
    OffsetDateTime::now_utc().format(&Rfc3339).ok()
}

// ── Abbildung Kern ↔ Wire ────────────────────────────────────────────────────

impl SessionDocument {
    /// Baut das Dokument zu einer Session, inklusive Zeitstempel.
    pub fn from_session(session: &Session) -> Self {
        let ledger = &session.ledger;
        Self {
            version: Some(DOCUMENT_VERSION.to_string()),
            name: session.name.clone(),
            mode: session.mode.as_wire().to_string(),
            saved_at: rfc3339_now(),
            points: ledger.points().iter().map(point_to_dto).collect(),
            undo_stack: ledger.undo_actions().iter().map(action_to_dto).collect(),
            redo_stack: ledger.redo_actions().iter().map(action_to_dto).collect(),
        }
    }

    /// Baut aus einem (geprüften) Dokument eine Session auf.
    pub fn into_session(
        self,
        undo_bound: Option<usize>,
        max_name_len: usize,
    ) -> Result<Session, SessionIoError> {
        let mode = SessionMode::from_wire(&self.mode).ok_or_else(|| SessionIoError::Invalid {
            name: self.name.clone(),
            reason: format!("unbekannter Modus '{}'", self.mode),
        })?;
        let points = self.points.iter().map(dto_to_point).collect();
        let undo = self.undo_stack.iter().map(dto_to_action).collect();
        let redo = self.redo_stack.iter().map(dto_to_action).collect();
        Ok(Session {
            name: sanitize_session_name(&self.name, max_name_len),
            mode,
            ledger: SessionLedger::from_parts(points, undo, redo, undo_bound),
            view_only: false,
        })
    }
}

fn point_to_dto(point: &ChartPoint) -> PointDto {
    PointDto {
        x: f64::from(point.position.x),
        y: f64::from(point.position.y),
        rotation: point.rotation.map(|r| i64::from(r.get())),
        // Beim Schreiben sind die Felder immer vorhanden, notfalls als `null`.
        jersey_number: Some(point.jersey_number.clone()),
        team: Some(point.team.map(team_to_wire)),
        line: point.line.map(|l| LineDto {
            start_x: f64::from(l.start.x),
            start_y: f64::from(l.start.y),
            end_x: f64::from(l.end.x),
            end_y: f64::from(l.end.y),
        }),
    }
}

fn dto_to_point(dto: &PointDto) -> ChartPoint {
    ChartPoint {
        position: Vec2::new(dto.x as f32, dto.y as f32),
        rotation: dto
            .rotation
            .and_then(|r| u8::try_from(r).ok())
            .and_then(Rotation::new),
        jersey_number: dto.jersey_number.clone().flatten(),
        team: dto.team.as_ref().and_then(|t| t.as_deref()).and_then(team_from_wire),
        line: dto.line.as_ref().map(|l| {
            ChartLine::new(
                Vec2::new(l.start_x as f32, l.start_y as f32),
                Vec2::new(l.end_x as f32, l.end_y as f32),
            )
        }),
    }
}

fn action_to_dto(action: &ChartAction) -> ActionDto {
    match action {
        ChartAction::Add(point) => ActionDto::Add {
            point: point_to_dto(point),
        },
        ChartAction::Clear(points) => ActionDto::Clear {
            points: points.iter().map(point_to_dto).collect(),
        },
    }
}

fn dto_to_action(dto: &ActionDto) -> ChartAction {
    match dto {
        ActionDto::Add { point } => ChartAction::Add(dto_to_point(point)),
        ActionDto::Clear { points } => ChartAction::Clear(points.iter().map(dto_to_point).collect()),
    }
}

fn team_to_wire(team: Team) -> String {
    match team {
        Team::Us => "us".to_string(),
        Team::Opp => "opp".to_string(),
    }
}

fn team_from_wire(value: &str) -> Option<Team> {
    match value {
        "us" => Some(Team::Us),
        "opp" => Some(Team::Opp),
        _ => None,
    }
}
