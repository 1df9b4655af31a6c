//! Handler für Filter-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt das Land (inklusive atomarem Stadt-Reset).
pub fn set_country(state: &mut AppState, country: String) {
    use_cases::filter::set_country(state, country);
}

/// Setzt die Stadt.
pub fn set_city(state: &mut AppState, city: String) {
    use_cases::filter::set_city(state, city);
}

/// Setzt den Mindestumsatz.
pub fn set_min_turnover(state: &mut AppState, min_turnover: u64) {
    use_cases::filter::set_min_turnover(state, min_turnover);
}
