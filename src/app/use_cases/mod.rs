//! Use-Cases: die eigentliche Anwendungslogik hinter den Handlern.

pub mod charting;
pub mod file_io;
pub mod history;
pub mod session;
