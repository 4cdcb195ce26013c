//! Gemeinsame Bausteine: Konfiguration und die Zeichen-Schnittstelle.

pub mod options;
pub mod sketch;

pub use options::ChartOptions;
pub use sketch::{RecordingTarget, SketchOp, SketchTarget};
