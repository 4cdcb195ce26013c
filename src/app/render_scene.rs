//! Baut die Zeichenliste für den aktuellen Anwendungszustand.

use crate::app::state::AppState;
use crate::shared::sketch::{sketch_session, RecordingTarget};

/// Zeichnet Spielfeld und gefilterte Punkte der aktiven Session in eine
/// aufgezeichnete Szene. Das Backend spielt sie mit
/// [`RecordingTarget::replay`] ab.
pub fn build(state: &AppState) -> RecordingTarget {
    let mut scene = RecordingTarget::new();
    let layout = state.layout();
    sketch_session(
        &mut scene,
        &layout,
        state.session.ledger.points(),
        &state.filters,
    );
    scene
}
