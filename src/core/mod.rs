//! Kernlogik des Editors: Datenmodell, Punktverwaltung, Filter und Geometrie.
//! Frei von UI- und Datei-Belangen, dadurch vollständig testbar.

pub mod filter;
pub mod geometry;
pub mod ledger;
pub mod point;
pub mod session;

pub use filter::FilterEngine;
pub use geometry::{CourtLayout, CourtRect};
pub use ledger::{ChartAction, SessionLedger};
pub use point::{ChartLine, ChartPoint, Rotation, Team};
pub use session::{Session, SessionMode};
