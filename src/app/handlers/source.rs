//! Handler für Record-Quelle und Karten-Bibliothek.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt die Record-Liste aus JSON-Rohtext.
pub fn load_records(state: &mut AppState, json: &str) {
    use_cases::load::load_records(state, json);
}

/// Markiert die Record-Quelle als fehlgeschlagen.
pub fn fail_source(state: &mut AppState, message: String) {
    use_cases::load::fail_source(state, message);
}

/// Fordert die Karten-Bibliothek an (idempotent).
pub fn acquire_provider(state: &mut AppState) {
    state.provider.begin_acquire();
}

/// Markiert die Karten-Bibliothek als einsatzbereit.
pub fn mark_provider_ready(state: &mut AppState) {
    state.provider.ready();
}

/// Markiert die Karten-Bibliothek als fehlgeschlagen.
pub fn fail_provider(state: &mut AppState, message: String) {
    state.provider.fail(message);
}

/// Baut die Karten-Bibliothek kontrolliert ab.
pub fn shutdown_provider(state: &mut AppState) {
    state.provider.shutdown();
}
