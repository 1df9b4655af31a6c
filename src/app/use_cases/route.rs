//! Use-Cases für den Anfrage-Lebenszyklus beim Routing-Provider.
//!
//! Der Controller führt keine Provider-I/O aus: `request` legt die
//! Anfrage mit Sequenznummer im State ab, der Host führt sie aus und
//! reicht die Antwort als Intent zurück, `apply` prüft die Nummer und
//! übernimmt das Ergebnis.

use crate::app::state::PendingQuery;
use crate::app::AppState;
use crate::directions::{self, DirectionsRequest, DirectionsResult};

/// Erzeugt aus den aktuellen Stops eine Provider-Anfrage.
///
/// Nur im aktiven Modus mit mindestens zwei Stops und geladener
/// Karten-Bibliothek. Die Anfrage trägt die nächste Sequenznummer und
/// ersetzt eine eventuell noch ausstehende ältere Anfrage.
pub fn request(state: &mut AppState) {
    if !state.can_compute_route() {
        log::warn!(
            "Routenberechnung mit {} Stops angefordert (mindestens 2 nötig)",
            state.selection.stops.len()
        );
        return;
    }
    if !state.provider.is_ready() {
        log::warn!("Routenberechnung ohne geladene Karten-Bibliothek angefordert");
        return;
    }

    let stops = state.selection.stop_ids();
    let mut coords = Vec::with_capacity(stops.len());
    for &id in &stops {
        match state.store.get(id) {
            Some(record) => coords.push(record.position()),
            None => {
                log::warn!("Stop {} nicht im Store, Anfrage verworfen", id);
                return;
            }
        }
    }

    let request = DirectionsRequest {
        origin: coords[0],
        destination: coords[coords.len() - 1],
        waypoints: coords[1..coords.len() - 1].to_vec(),
        optimize_waypoints: true,
    };
    let seq = state.route.next_seq();
    state.route.pending = Some(PendingQuery { seq, request });
    log::info!("Provider-Anfrage {} mit {} Stops erzeugt", seq, stops.len());
}

/// Wendet eine eingetroffene Provider-Antwort an.
///
/// Antworten ohne passende ausstehende Anfrage (verworfene oder ältere
/// Sequenznummer) stammen von einer inzwischen geänderten Stop-Liste
/// und werden ignoriert. Ein Nicht-OK-Status erzeugt keine
/// Zusammenfassung; die vorherige bleibt verworfen, nicht repariert.
pub fn apply(state: &mut AppState, seq: u64, result: DirectionsResult) {
    let Some(pending) = state.route.pending.as_ref() else {
        log::warn!("Provider-Antwort {} ohne ausstehende Anfrage verworfen", seq);
        return;
    };
    if pending.seq != seq {
        log::warn!(
            "Veraltete Provider-Antwort {} verworfen (aktuell {})",
            seq,
            pending.seq
        );
        return;
    }
    state.route.pending = None;

    let stops = state.selection.stop_ids();
    match directions::summarize(&stops, &result) {
        Some(summary) => {
            log::info!(
                "Route berechnet: {} / {} über {} Teilstücke",
                summary.total_distance,
                summary.total_duration,
                summary.legs.len()
            );
            state.route.summary = Some(summary);
        }
        None => {
            log::info!("Keine Route berechnet (Status {:?})", result.status);
        }
    }
}
