//! Handler für den Routing-Anfrage-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::directions::DirectionsResult;

/// Erzeugt eine Provider-Anfrage aus den aktuellen Stops.
pub fn request(state: &mut AppState) {
    use_cases::route::request(state);
}

/// Wendet eine eingetroffene Provider-Antwort an.
pub fn apply(state: &mut AppState, seq: u64, result: DirectionsResult) {
    use_cases::route::apply(state, seq, result);
}
