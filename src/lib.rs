//! VolleyChart-Editor — Kernbibliothek des Volleyball-Scouting-Tools.
//!
//! Punkte werden per Klick (Wolke) oder Drag (Linie) auf einer
//! Spielfeld-Leinwand erfasst, gefiltert nach Trikot und Rotation,
//! als JSON-Dokumente gespeichert und bei Bedarf zusammengeführt.
//! Die einbettende Oberfläche spricht ausschließlich über
//! [`AppIntent`]s mit dem [`AppController`] und zeichnet die von
//! [`build_render_scene`](app::build_render_scene) gelieferte Szene.

pub mod app;
pub mod core;
pub mod session_io;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    ChartAction, ChartLine, ChartPoint, CourtLayout, FilterEngine, Rotation, Session, SessionLedger,
    SessionMode, Team,
};
pub use session_io::{
    combine_documents, read_session_file, write_session_file, LoadedSession, SessionIoError,
};
pub use shared::{ChartOptions, RecordingTarget, SketchOp, SketchTarget};
