//! Handler für Auswahl-Operationen (Modus, Stops, Detail-Fenster).

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet den Routenplanungs-Modus um.
pub fn toggle_mode(state: &mut AppState) {
    use_cases::selection::toggle_mode(state);
}

/// Hängt einen Record als Stop an.
pub fn add_stop(state: &mut AppState, record_id: u64) {
    use_cases::selection::add_stop(state, record_id);
}

/// Entfernt den Stop am gegebenen Index.
pub fn remove_stop(state: &mut AppState, index: usize) {
    use_cases::selection::remove_stop(state, index);
}

/// Verwirft Stops und Zusammenfassung.
pub fn clear_route(state: &mut AppState) {
    use_cases::selection::clear_route(state);
}

/// Öffnet das Detail-Fenster für einen Record.
pub fn show_detail(state: &mut AppState, record_id: u64) {
    use_cases::selection::show_detail(state, record_id);
}

/// Schließt das Detail-Fenster.
pub fn close_detail(state: &mut AppState) {
    use_cases::selection::close_detail(state);
}
