//! Use-Cases für das Laden der Record-Quelle.
//! Die Quelle wird einmal beim Start geladen; der Host beschafft den
//! JSON-Rohtext und reicht ihn als Intent herein.

use crate::app::state::SourcePhase;
use crate::app::AppState;
use crate::core::{self, Record, RecordStore};

/// Lädt die Record-Liste aus dem JSON-Rohtext der Quelle.
///
/// Bei einem Parse-Fehler bleibt der Store leer und die Quelle wird als
/// fehlgeschlagen markiert; Filter- und Auswahllogik bleiben inert, aber
/// funktionsfähig.
pub fn load_records(state: &mut AppState, json: &str) {
    match serde_json::from_str::<Vec<Record>>(json) {
        Ok(records) => {
            state.store = RecordStore::from_records(records);
            state.ui.source_phase = SourcePhase::Ready;
            state.filter.visible = core::apply_filter(&state.store, &state.filter.criteria);
            log::info!(
                "Record-Quelle geladen: {} Records, {} sichtbar",
                state.store.record_count(),
                state.filter.visible.len()
            );
        }
        Err(e) => {
            fail_source(state, format!("Record-Quelle nicht lesbar: {}", e));
        }
    }
}

/// Markiert die Record-Quelle als fehlgeschlagen.
/// Der Store bleibt leer, abhängiger Zustand wird zurückgesetzt.
pub fn fail_source(state: &mut AppState, message: String) {
    log::warn!("Record-Quelle fehlgeschlagen: {}", message);
    state.store = RecordStore::default();
    state.filter.visible.clear();
    state.selection.stops.clear();
    state.route.invalidate();
    state.ui.detail_record = None;
    state.ui.source_phase = SourcePhase::Failed(message);
}
