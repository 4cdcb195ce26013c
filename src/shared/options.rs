//! Zentrale Konfiguration für den VolleyChart-Editor.
//!
//! `ChartOptions` enthält alle beim Start gelesenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Nach dem Laden wird die Konfiguration nicht mehr verändert —
//! alle Komponenten erhalten sie als Referenz.

use serde::{Deserialize, Serialize};

// ── Leinwand / Spielfeld ────────────────────────────────────────────

/// Kantenlänge der quadratischen Leinwand in Pixeln.
pub const CANVAS_SIZE_PX: f32 = 600.0;
/// Seitenlänge des Gesamt-Rasters in Metern (Spielfeldhälfte + Freiraum).
pub const GRID_SIZE_M: f32 = 15.0;
/// Seitenlänge des inneren Quadrats (Spielfeldhälfte) in Metern.
pub const INNER_SQUARE_M: f32 = 9.0;
/// Leinwand-Höhe im Charting-Modus in Metern (beide Hälften + Freiraum).
pub const CHART_CANVAS_HEIGHT_M: f32 = 22.0;

// ── Ledger ──────────────────────────────────────────────────────────

/// Maximale Tiefe der Undo/Redo-Stacks (0 = unbegrenzt).
pub const UNDO_LIMIT: usize = 1000;

// ── Dokumente ───────────────────────────────────────────────────────

/// Maximale Dokumentgröße in Bytes (10 MiB).
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;
/// Punktanzahl, ab der ein Merge nur nach Bestätigung ausgeführt wird.
pub const MERGE_POINT_THRESHOLD: usize = 10_000;
/// Maximale Länge eines Session-Namens (nach Sanitisierung).
pub const MAX_SESSION_NAME_LEN: usize = 50;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start konfigurierbaren Editor-Optionen.
/// Wird als `volley_chart_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOptions {
    // ── Spielfeld-Geometrie ─────────────────────────────────────
    /// Kantenlänge der quadratischen Leinwand in Pixeln
    pub canvas_size_px: f32,
    /// Seitenlänge des Gesamt-Rasters in Metern
    pub grid_size_m: f32,
    /// Seitenlänge des inneren Quadrats (Spielfeldhälfte) in Metern
    pub inner_square_m: f32,

    // ── Ledger ──────────────────────────────────────────────────
    /// Maximale Tiefe der Undo/Redo-Stacks (0 = unbegrenzt)
    pub undo_limit: usize,
    /// Älteste Einträge automatisch verwerfen, sobald das Limit erreicht ist
    pub auto_trim: bool,

    // ── Dokumente ───────────────────────────────────────────────
    /// Maximale Dokumentgröße in Bytes
    pub max_document_bytes: u64,
    /// Punktanzahl, ab der ein Merge nur nach Bestätigung läuft
    #[serde(default = "default_merge_point_threshold")]
    pub merge_point_threshold: usize,
    /// Maximale Länge eines Session-Namens
    #[serde(default = "default_max_session_name_len")]
    pub max_session_name_len: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            canvas_size_px: CANVAS_SIZE_PX,
            grid_size_m: GRID_SIZE_M,
            inner_square_m: INNER_SQUARE_M,

            undo_limit: UNDO_LIMIT,
            auto_trim: true,

            max_document_bytes: MAX_DOCUMENT_BYTES,
            merge_point_threshold: MERGE_POINT_THRESHOLD,
            max_session_name_len: MAX_SESSION_NAME_LEN,
        }
    }
}

/// Serde-Default für `merge_point_threshold` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_merge_point_threshold() -> usize {
    MERGE_POINT_THRESHOLD
}

/// Serde-Default für `max_session_name_len` (Abwärtskompatibilität).
fn default_max_session_name_len() -> usize {
    MAX_SESSION_NAME_LEN
}

impl ChartOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("volley_chart_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("volley_chart_editor.toml")
    }

    /// Undo-Limit als Option: `None` bedeutet unbegrenzte Stacks.
    pub fn undo_bound(&self) -> Option<usize> {
        if self.auto_trim && self.undo_limit > 0 {
            Some(self.undo_limit)
        } else {
            None
        }
    }
}
