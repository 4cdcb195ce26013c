//! Handler-Module: dünne Schicht zwischen Controller und Use-Cases.

pub mod charting;
pub mod file_io;
pub mod filters;
pub mod history;
pub mod session;
