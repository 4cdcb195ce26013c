//! Session-Identität: Name, Modus und zugehörige Punktverwaltung.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::ledger::SessionLedger;

/// Erfassungsmodus einer Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Quadratische Leinwand, nur Wolken-Punkte.
    Simple,
    /// Hochformatige Leinwand mit gespiegelten Feldhälften und Linien.
    Charting,
}

impl SessionMode {
    /// Modus-Kennung im Dateiformat.
    pub fn as_wire(self) -> &'static str {
        match self {
            SessionMode::Simple => "simple",
            SessionMode::Charting => "charting",
        }
    }

    /// Liest die Modus-Kennung aus dem Dateiformat.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "simple" => Some(SessionMode::Simple),
            "charting" => Some(SessionMode::Charting),
            _ => None,
        }
    }

    /// Suffix für Dateinamen, damit beide Modi nebeneinander existieren.
    pub fn file_suffix(self) -> &'static str {
        match self {
            SessionMode::Simple => "_simple",
            SessionMode::Charting => "_charting",
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Eine Chart-Session: benannte Punktsammlung in genau einem Modus.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bereinigter Anzeigename (zugleich Basis des Dateinamens).
    pub name: String,
    pub mode: SessionMode,
    pub ledger: SessionLedger,
    /// Geteilte Sessions werden nur lesend geöffnet.
    pub view_only: bool,
}

impl Session {
    /// Erstellt eine leere Session; der Name wird bereinigt und gekürzt.
    pub fn new(
        raw_name: &str,
        mode: SessionMode,
        undo_bound: Option<usize>,
        max_name_len: usize,
    ) -> Self {
        Self {
            name: sanitize_session_name(raw_name, max_name_len),
            mode,
            ledger: SessionLedger::new(undo_bound),
            view_only: false,
        }
    }

    /// Benennt die Session um (mit Bereinigung).
    pub fn rename(&mut self, raw_name: &str, max_name_len: usize) {
        self.name = sanitize_session_name(raw_name, max_name_len);
    }

    /// Dateiname-Stamm: bereinigter Name plus Modus-Suffix.
    pub fn file_stem(&self) -> String {
        format!("{}{}", self.name, self.mode.file_suffix())
    }
}

fn forbidden_name_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9A-Za-z _\-]").expect("statisches Muster"))
}

/// Bereinigt einen Session-Namen für sichere Dateinamen: nur ASCII-Buchstaben,
/// Ziffern, Leerzeichen, `_` und `-`; anschließend getrimmt und auf
/// `max_len` Zeichen gekürzt. Ein leerer Rest wird zu `"session"`.
pub fn sanitize_session_name(raw: &str, max_len: usize) -> String {
    let cleaned = forbidden_name_chars().replace_all(raw, "");
    let trimmed: String = cleaned.trim().chars().take(max_len).collect();
    if trimmed.is_empty() {
        "session".to_string()
    } else {
        trimmed
    }
}
