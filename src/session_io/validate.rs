//! Strukturprüfung geladener Session-Dokumente.
//!
//! Harte Regeln (Name, Modus, Rotationsbereich, Team-Kennung, endliche
//! Koordinaten) führen zum Abbruch mit [`SessionIoError::Invalid`].
//! Weiche Auffälligkeiten (Versionsabweichung, Koordinaten außerhalb der
//! Leinwand, kuriose Trikotnummern) werden als Warnungen gesammelt und dem
//! Aufrufer zum Protokollieren übergeben.

use crate::core::point::is_valid_jersey;
use crate::core::session::SessionMode;
use crate::session_io::document::{ActionDto, PointDto, SessionDocument, DOCUMENT_VERSION};
use crate::session_io::error::SessionIoError;

/// Prüft ein Dokument vor der Übernahme. `label` benennt die Quelle in
/// Fehlermeldungen (Dateiname oder Session-Name); `max_coord_px` ist die
/// Obergrenze plausibler Pixelkoordinaten.
pub fn validate_document(
    doc: &SessionDocument,
    label: &str,
    max_coord_px: f64,
) -> Result<Vec<String>, SessionIoError> {
    let mut warnings = Vec::new();

    if doc.name.trim().is_empty() {
        return Err(invalid(label, "leerer Session-Name".to_string()));
    }
    if SessionMode::from_wire(&doc.mode).is_none() {
        return Err(invalid(label, format!("unbekannter Modus '{}'", doc.mode)));
    }

    if !check_version_compatibility(doc.version.as_deref()) {
        return Err(invalid(
            label,
            "Dokument-Version wird nicht mehr unterstützt".to_string(),
        ));
    }
    match doc.version.as_deref() {
        None => warnings.push("Dokument ohne Versionsfeld (Altbestand)".to_string()),
        Some(raw) => match (raw.parse::<u32>(), DOCUMENT_VERSION.parse::<u32>()) {
            (Ok(version), Ok(current)) if version > current => warnings.push(format!(
                "Dokument-Version {version} ist neuer als {current}, wird trotzdem geladen"
            )),
            (Err(_), _) => warnings.push(format!("unlesbare Dokument-Version '{raw}'")),
            _ => {}
        },
    }

    let mut out_of_range = 0usize;

    for (idx, point) in doc.points.iter().enumerate() {
        let location = format!("Punkt {idx} in 'points'");
        check_point(point, &location, max_coord_px, &mut warnings, &mut out_of_range)
            .map_err(|reason| invalid(label, reason))?;
    }
    check_stack(&doc.undo_stack, "undoStack", max_coord_px, &mut warnings, &mut out_of_range)
        .map_err(|reason| invalid(label, reason))?;
    check_stack(&doc.redo_stack, "redoStack", max_coord_px, &mut warnings, &mut out_of_range)
        .map_err(|reason| invalid(label, reason))?;

    if out_of_range > 0 {
        warnings.push(format!(
            "{out_of_range} Punkt(e) mit Koordinaten außerhalb der Leinwand"
        ));
    }

    Ok(warnings)
}

/// Versionsvergleich gegen [`DOCUMENT_VERSION`]: derzeit immer kompatibel,
/// der Haken existiert für eine spätere Mindestversions-Prüfung. Der
/// Vergleich wird auch im permissiven Fall protokolliert.
pub fn check_version_compatibility(version: Option<&str>) -> bool {
    match version {
        Some(found) => log::debug!("Dokument-Version '{found}', aktuell '{DOCUMENT_VERSION}'"),
        None => log::debug!("Dokument ohne Version, aktuell '{DOCUMENT_VERSION}'"),
    }
    true
}

fn invalid(label: &str, reason: String) -> SessionIoError {
    SessionIoError::Invalid {
        name: label.to_string(),
        reason,
    }
}

fn check_stack(
    stack: &[ActionDto],
    stack_name: &str,
    max_coord_px: f64,
    warnings: &mut Vec<String>,
    out_of_range: &mut usize,
) -> Result<(), String> {
    for (idx, action) in stack.iter().enumerate() {
        match action {
            ActionDto::Add { point } => {
                let location = format!("Aktion {idx} in '{stack_name}'");
                check_point(point, &location, max_coord_px, warnings, out_of_range)?;
            }
            ActionDto::Clear { points } => {
                for (p_idx, point) in points.iter().enumerate() {
                    let location = format!("Aktion {idx} in '{stack_name}', Punkt {p_idx}");
                    check_point(point, &location, max_coord_px, warnings, out_of_range)?;
                }
            }
        }
    }
    Ok(())
}

fn check_point(
    point: &PointDto,
    location: &str,
    max_coord_px: f64,
    warnings: &mut Vec<String>,
    out_of_range: &mut usize,
) -> Result<(), String> {
    let mut coords = vec![point.x, point.y];
    if let Some(line) = &point.line {
        coords.extend([line.start_x, line.start_y, line.end_x, line.end_y]);
    }
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(format!("{location}: nicht-endliche Koordinate"));
    }

    if let Some(rotation) = point.rotation {
        if !(1..=6).contains(&rotation) {
            return Err(format!("{location}: Rotation {rotation} außerhalb von 1..6"));
        }
    }
    if let Some(Some(team)) = &point.team {
        if !matches!(team.as_str(), "us" | "opp") {
            return Err(format!("{location}: unbekanntes Team '{team}'"));
        }
    }
    if let Some(Some(jersey)) = &point.jersey_number {
        if !is_valid_jersey(jersey) {
            warnings.push(format!("{location}: ungewöhnliche Trikotnummer '{jersey}'"));
        }
    }
    if coords.iter().any(|c| *c < 0.0 || *c > max_coord_px) {
        *out_of_range += 1;
    }
    Ok(())
}
