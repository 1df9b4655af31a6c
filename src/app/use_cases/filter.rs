//! Use-Cases für Filterkriterien-Änderungen.

use crate::app::AppState;
use crate::core;

/// Setzt das Land und setzt die Stadt im selben Übergang zurück.
///
/// Beides ist ein einziger kombinierter Zustandsübergang: es gibt keinen
/// Zwischenzustand mit einer Stadt zu einem nicht mehr gewählten Land.
pub fn set_country(state: &mut AppState, country: String) {
    state.filter.criteria.country = country;
    state.filter.criteria.city.clear();
    criteria_changed(state);
    log::info!(
        "Filter: Land '{}', {} Records sichtbar",
        state.filter.criteria.country,
        state.filter.visible.len()
    );
}

/// Setzt die Stadt. Ohne gewähltes Land ist der Aufruf ein No-op.
pub fn set_city(state: &mut AppState, city: String) {
    if state.filter.criteria.country.is_empty() {
        log::warn!("Stadt-Filter ohne gewähltes Land ignoriert: '{}'", city);
        return;
    }
    state.filter.criteria.city = city;
    criteria_changed(state);
    log::info!(
        "Filter: Stadt '{}', {} Records sichtbar",
        state.filter.criteria.city,
        state.filter.visible.len()
    );
}

/// Setzt den Mindestumsatz.
pub fn set_min_turnover(state: &mut AppState, min_turnover: u64) {
    state.filter.criteria.min_turnover = min_turnover;
    criteria_changed(state);
    log::info!(
        "Filter: Mindestumsatz {}, {} Records sichtbar",
        min_turnover,
        state.filter.visible.len()
    );
}

/// Gemeinsamer Abschluss jeder Kriterien-Änderung.
///
/// Die sichtbare Menge wird vollständig neu berechnet; eine aktive Route
/// würde Stops beschreiben, die nicht mehr sichtbar sein müssen, und
/// wird deshalb verworfen. Das Detail-Fenster schließt ebenfalls.
fn criteria_changed(state: &mut AppState) {
    state.filter.visible = core::apply_filter(&state.store, &state.filter.criteria);
    super::selection::clear_route(state);
    state.ui.detail_record = None;
}
