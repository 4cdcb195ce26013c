//! Persistenz-Schicht: Wire-Format, Prüfung, Migration, Zusammenführung
//! und Dateizugriff für Session-Dokumente.

pub mod document;
pub mod error;
pub mod files;
pub mod merge;
pub mod migrate;
pub mod validate;

pub use document::{SessionDocument, DOCUMENT_VERSION};
pub use error::SessionIoError;
pub use files::{
    read_session_document, read_session_file, session_file_name, write_session_file, LoadedSession,
};
pub use merge::{combine_documents, combined_point_count};
pub use migrate::{migrate_document, MigrationReport};
pub use validate::{check_version_compatibility, validate_document};
