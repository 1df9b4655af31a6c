//! Aggregation einer Provider-Antwort zu einer Routen-Zusammenfassung.

use super::{DirectionsResult, DirectionsRoute};

/// Beschriftetes Teilstück der zusammengefassten Route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    /// Record am Start des Teilstücks
    pub from: u64,
    /// Record am Ende des Teilstücks
    pub to: u64,
    /// Distanz-Anzeigetext des Providers, unverändert übernommen
    pub distance_text: String,
    /// Dauer-Anzeigetext des Providers, unverändert übernommen
    pub duration_text: String,
}

/// Zusammenfassung einer berechneten Route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Gesamtdistanz, formatiert ("X.Y km")
    pub total_distance: String,
    /// Gesamtdauer, formatiert ("Xh YYm")
    pub total_duration: String,
    /// Teilstücke in Fahr-Reihenfolge
    pub legs: Vec<RouteLeg>,
    /// Effektive Stop-Reihenfolge nach der Provider-Umsortierung.
    /// Konsumenten lesen die Reihenfolge hier, nicht aus der Stop-Liste.
    pub stop_order: Vec<u64>,
}

/// Fasst eine Provider-Antwort über den gegebenen Stops zusammen.
///
/// `stops` ist die Auswahl-Reihenfolge (Origin, Zwischenstops, Ziel).
/// Liefert `None` bei Nicht-OK-Status, fehlender Route, weniger als zwei
/// Stops oder einer Antwort, die nicht zur Stop-Anzahl passt; eine
/// frühere Zusammenfassung wird nie repariert.
pub fn summarize(stops: &[u64], result: &DirectionsResult) -> Option<RouteSummary> {
    if stops.len() < 2 {
        return None;
    }
    let route = result.ok_route()?;
    let stop_order = effective_stop_order(stops, route)?;
    if route.legs.len() + 1 != stop_order.len() {
        log::warn!(
            "Provider-Antwort passt nicht zur Stop-Anzahl: {} Teilstücke, {} Stops",
            route.legs.len(),
            stop_order.len()
        );
        return None;
    }

    let total_meters: u64 = route.legs.iter().map(|leg| leg.distance.value).sum();
    let total_seconds: u64 = route.legs.iter().map(|leg| leg.duration.value).sum();

    let legs = route
        .legs
        .iter()
        .enumerate()
        .map(|(i, leg)| RouteLeg {
            from: stop_order[i],
            to: stop_order[i + 1],
            distance_text: leg.distance.text.clone(),
            duration_text: leg.duration.text.clone(),
        })
        .collect();

    Some(RouteSummary {
        total_distance: format_total_distance(total_meters),
        total_duration: format_total_duration(total_seconds),
        legs,
        stop_order,
    })
}

/// Gesamtdistanz in Kilometern mit genau einer Nachkommastelle.
fn format_total_distance(meters: u64) -> String {
    format!("{:.1} km", meters as f64 / 1000.0)
}

/// Gesamtdauer als "Xh YYm" (Minuten zweistellig).
///
/// Stunden und Minuten werden unabhängig voneinander berechnet; 59.6
/// Minuten runden zu "60m" ohne Übertrag in das Stundenfeld. Bekannter
/// Randfall, bewusst beibehalten.
fn format_total_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = ((seconds % 3600) as f64 / 60.0).round() as u64;
    format!("{hours}h {minutes:02}m")
}

/// Wendet die Provider-Umsortierung auf die Auswahl-Reihenfolge an.
///
/// Origin und Ziel bleiben fest, `waypoint_order` permutiert nur die
/// Zwischenstops. `None` bei einer Reihenfolge, die nicht zu den
/// Waypoints der Anfrage passt.
fn effective_stop_order(stops: &[u64], route: &DirectionsRoute) -> Option<Vec<u64>> {
    let middle = &stops[1..stops.len() - 1];
    if route.waypoint_order.len() != middle.len() {
        log::warn!(
            "Waypoint-Reihenfolge passt nicht: {} Einträge für {} Zwischenstops",
            route.waypoint_order.len(),
            middle.len()
        );
        return None;
    }

    let mut order = Vec::with_capacity(stops.len());
    order.push(stops[0]);
    for &index in &route.waypoint_order {
        match middle.get(index) {
            Some(&id) => order.push(id),
            None => {
                log::warn!("Waypoint-Index {} außerhalb der Zwischenstops", index);
                return None;
            }
        }
    }
    order.push(stops[stops.len() - 1]);
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::super::{DirectionsLeg, DirectionsStatus, TextValue};
    use super::*;

    fn leg(meters: u64, seconds: u64) -> DirectionsLeg {
        DirectionsLeg {
            distance: TextValue::new(meters, format!("{meters} m")),
            duration: TextValue::new(seconds, format!("{seconds} s")),
        }
    }

    fn ok_result(legs: Vec<DirectionsLeg>, waypoint_order: Vec<usize>) -> DirectionsResult {
        DirectionsResult {
            status: DirectionsStatus::Ok,
            routes: vec![DirectionsRoute {
                legs,
                waypoint_order,
            }],
        }
    }

    #[test]
    fn distances_sum_to_one_decimal_kilometers() {
        assert_eq!(format_total_distance(1000 + 2500), "3.5 km");
        assert_eq!(format_total_distance(5000), "5.0 km");
    }

    #[test]
    fn duration_decomposes_into_hours_and_padded_minutes() {
        assert_eq!(format_total_duration(5400), "1h 30m");
        assert_eq!(format_total_duration(3600), "1h 00m");
    }

    #[test]
    fn minutes_round_to_sixty_without_carry() {
        // 3576 s = 59.6 min: rundet zu "60m", kein Übertrag in die Stunden
        assert_eq!(format_total_duration(3576), "0h 60m");
    }

    #[test]
    fn two_leg_route_aggregates_totals_and_leg_texts() {
        let result = ok_result(vec![leg(2000, 1200), leg(3000, 2400)], vec![1]);

        let summary = summarize(&[10, 20, 30], &result).expect("Zusammenfassung erwartet");

        assert_eq!(summary.total_distance, "5.0 km");
        assert_eq!(summary.total_duration, "1h 00m");
        assert_eq!(summary.legs.len(), 2);
        assert_eq!(summary.legs[0].distance_text, "2000 m");
        assert_eq!(summary.legs[1].duration_text, "2400 s");
    }

    #[test]
    fn waypoint_order_relabels_the_legs() {
        // Auswahl [A, B, C, D], Provider fährt die Zwischenstops als [C, B]
        let result = ok_result(
            vec![leg(1000, 600), leg(1000, 600), leg(1000, 600)],
            vec![1, 0],
        );

        let summary = summarize(&[1, 2, 3, 4], &result).expect("Zusammenfassung erwartet");

        assert_eq!(summary.stop_order, vec![1, 3, 2, 4]);
        assert_eq!((summary.legs[0].from, summary.legs[0].to), (1, 3));
        assert_eq!((summary.legs[1].from, summary.legs[1].to), (3, 2));
        assert_eq!((summary.legs[2].from, summary.legs[2].to), (2, 4));
    }

    #[test]
    fn failure_status_yields_no_summary() {
        let result = DirectionsResult {
            status: DirectionsStatus::ZeroResults,
            routes: Vec::new(),
        };

        assert!(summarize(&[1, 2], &result).is_none());
    }

    #[test]
    fn fewer_than_two_stops_yield_no_summary() {
        let result = ok_result(vec![leg(1000, 600)], Vec::new());

        assert!(summarize(&[1], &result).is_none());
        assert!(summarize(&[], &result).is_none());
    }

    #[test]
    fn mismatched_leg_count_is_rejected() {
        // Zwei Stops, aber drei Teilstücke: nicht zuordenbar
        let result = ok_result(vec![leg(1, 1), leg(1, 1), leg(1, 1)], Vec::new());

        assert!(summarize(&[1, 2], &result).is_none());
    }

    #[test]
    fn out_of_range_waypoint_order_is_rejected() {
        let result = ok_result(vec![leg(1, 1), leg(1, 1)], vec![5]);

        assert!(summarize(&[1, 2, 3], &result).is_none());
    }
}
