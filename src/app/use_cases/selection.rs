//! Use-Cases für Routenplanungs-Modus, Stop-Liste und Detail-Fenster.

use crate::app::AppState;

/// Schaltet den Routenplanungs-Modus um.
///
/// In beide Richtungen ein voller Reset: Stops leer, Zusammenfassung und
/// ausstehende Anfrage verworfen, Detail-Fenster geschlossen.
pub fn toggle_mode(state: &mut AppState) {
    state.selection.active = !state.selection.active;
    state.selection.stops.clear();
    state.route.invalidate();
    state.ui.detail_record = None;
    log::info!(
        "Routenplanung {}",
        if state.selection.active {
            "aktiviert"
        } else {
            "deaktiviert"
        }
    );
}

/// Hängt einen Record an die Stop-Liste an (Klick-Reihenfolge).
///
/// Dedupliziert über die kanonische ID des (Name, Adresse)-Schlüssels.
/// Bereits gewählte Records und unbekannte IDs sind stille No-ops.
pub fn add_stop(state: &mut AppState, record_id: u64) {
    if !state.selection.active {
        return;
    }
    let Some(canonical) = state.store.canonical_id(record_id) else {
        log::warn!("Klick auf unbekannten Record {} ignoriert", record_id);
        return;
    };
    if state.selection.stops.insert(canonical) {
        state.route.invalidate();
        log::info!(
            "Stop {} hinzugefügt ({} gesamt)",
            canonical,
            state.selection.stops.len()
        );
    }
}

/// Entfernt den Stop am gegebenen Index (Klick-Reihenfolge).
///
/// Nachfolgende Stops rücken auf; eine vorhandene Zusammenfassung ist
/// damit ungültig und wird verworfen. Ein Index außerhalb der Liste
/// verletzt den Aufrufer-Vertrag und wird ohne Änderung ignoriert.
pub fn remove_stop(state: &mut AppState, index: usize) {
    if index >= state.selection.stops.len() {
        log::warn!(
            "Stop-Index {} außerhalb der Liste ({} Stops)",
            index,
            state.selection.stops.len()
        );
        return;
    }
    state.selection.stops.shift_remove_index(index);
    state.route.invalidate();
    log::info!("Stop entfernt ({} verbleibend)", state.selection.stops.len());
}

/// Verwirft Stops und Zusammenfassung; der Modus bleibt unverändert.
pub fn clear_route(state: &mut AppState) {
    state.selection.stops.clear();
    state.route.invalidate();
}

/// Öffnet das Detail-Fenster für einen Record.
pub fn show_detail(state: &mut AppState, record_id: u64) {
    if state.store.get(record_id).is_some() {
        state.ui.detail_record = Some(record_id);
    } else {
        log::warn!("Detail-Fenster für unbekannten Record {} ignoriert", record_id);
    }
}

/// Schließt das Detail-Fenster.
pub fn close_detail(state: &mut AppState) {
    state.ui.detail_record = None;
}
