use company_map::{AppCommand, AppController, AppIntent, AppState, SourcePhase};

const RECORDS_JSON: &str = r#"[
  { "name": "Alpha GmbH", "annual_turnover": "€6,000,000", "company_size": "250 employees",
    "address": "Hauptstraße 1", "zip": "10115", "city": "Berlin", "country": "DE",
    "lat": 52.52, "lng": 13.405 },
  { "name": "Beta AG", "annual_turnover": "€4,000,000", "company_size": "80 employees",
    "address": "Ringweg 2", "zip": "80331", "city": "Munich", "country": "DE",
    "lat": 48.137, "lng": 11.575 },
  { "name": "Gamma SARL", "annual_turnover": "€10,000,000", "company_size": "120 employees",
    "address": "Rue Trois 3", "zip": "75001", "city": "Paris", "country": "FR",
    "lat": 48.857, "lng": 2.352 }
]"#;

fn loaded_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::RecordSourceLoaded {
                json: RECORDS_JSON.to_string(),
            },
        )
        .expect("Laden sollte ohne Fehler durchlaufen");
    state
}

#[test]
fn test_load_populates_store_and_visible_set() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);

    assert_eq!(state.ui.source_phase, SourcePhase::Ready);
    assert_eq!(state.record_count(), 3);
    // Standard-Mindestumsatz 5 Mio: Beta (4 Mio) fällt bereits heraus
    assert_eq!(state.filter.visible, vec![1, 3]);
}

#[test]
fn test_country_filter_narrows_to_the_berlin_record() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CountrySelected {
                country: "DE".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    // DE + Mindestumsatz 5 Mio: exakt der Berlin-Record
    assert_eq!(state.filter.visible, vec![1]);
}

#[test]
fn test_country_change_resets_city_in_the_same_transition() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::MinTurnoverChanged { min_turnover: 0 })
        .expect("Filter sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CountrySelected {
                country: "DE".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CitySelected {
                city: "Munich".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    assert_eq!(state.filter.visible, vec![2]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CountrySelected {
                country: "FR".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    // Landwechsel setzt die Stadt atomar zurück
    assert!(state.filter.criteria.city.is_empty());
    assert_eq!(state.filter.visible, vec![3]);
}

#[test]
fn test_city_without_country_is_ignored() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let visible_before = state.filter.visible.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CitySelected {
                city: "Paris".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    assert!(state.filter.criteria.city.is_empty());
    assert_eq!(state.filter.visible, visible_before);
}

#[test]
fn test_marker_click_outside_planning_opens_the_detail_view() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 1 })
        .expect("Klick sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.detail_record, Some(1));
    assert!(state.selection.stops.is_empty());

    // Jede Kriterien-Änderung schließt das Detail-Fenster
    controller
        .handle_intent(&mut state, AppIntent::MinTurnoverChanged { min_turnover: 0 })
        .expect("Filter sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.detail_record, None);
}

#[test]
fn test_toggle_planning_is_a_full_reset_in_both_directions() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");
    assert!(state.selection.active);

    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 1 })
        .expect("Klick sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 3 })
        .expect("Klick sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.stop_ids(), vec![1, 3]);

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");

    assert!(!state.selection.active);
    assert!(state.selection.stops.is_empty());
    assert!(state.route.summary.is_none());

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");

    assert!(state.selection.active);
    assert!(state.selection.stops.is_empty());
}

#[test]
fn test_second_click_on_the_same_record_is_a_noop() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");

    for record_id in [1, 3, 1] {
        controller
            .handle_intent(&mut state, AppIntent::MarkerClicked { record_id })
            .expect("Klick sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.selection.stop_ids(), vec![1, 3]);
}

#[test]
fn test_remove_stop_preserves_the_order_of_the_rest() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::MinTurnoverChanged { min_turnover: 0 })
        .expect("Filter sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");
    for record_id in [1, 2, 3] {
        controller
            .handle_intent(&mut state, AppIntent::MarkerClicked { record_id })
            .expect("Klick sollte ohne Fehler durchlaufen");
    }

    controller
        .handle_intent(&mut state, AppIntent::StopRemovalRequested { index: 1 })
        .expect("Entfernen sollte ohne Fehler durchlaufen");

    assert_eq!(state.selection.stop_ids(), vec![1, 3]);
}

#[test]
fn test_out_of_range_removal_leaves_the_stops_untouched() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 1 })
        .expect("Klick sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::StopRemovalRequested { index: 5 })
        .expect("Entfernen sollte robust sein");

    assert_eq!(state.selection.stop_ids(), vec![1]);
}

#[test]
fn test_filter_change_clears_stops_and_summary() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RoutePlanningToggled)
        .expect("Umschalten sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 1 })
        .expect("Klick sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 3 })
        .expect("Klick sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::MinTurnoverChanged {
                min_turnover: 1_000_000,
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    assert!(state.selection.stops.is_empty());
    assert!(state.route.summary.is_none());
    // Der Modus selbst bleibt erhalten
    assert!(state.selection.active);
}

#[test]
fn test_load_failure_leaves_the_controller_inert() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RecordSourceLoaded {
                json: "kein json".to_string(),
            },
        )
        .expect("Fehlgeschlagenes Laden sollte robust sein");

    assert!(matches!(state.ui.source_phase, SourcePhase::Failed(_)));
    assert_eq!(state.record_count(), 0);
    assert!(state.filter.visible.is_empty());

    // Filter- und Klick-Intents bleiben auf leerem Store funktionsfähig
    controller
        .handle_intent(
            &mut state,
            AppIntent::CountrySelected {
                country: "DE".to_string(),
            },
        )
        .expect("Filter sollte auf leerem Store robust sein");
    controller
        .handle_intent(&mut state, AppIntent::MarkerClicked { record_id: 1 })
        .expect("Klick sollte auf leerem Store robust sein");

    assert!(state.filter.visible.is_empty());
    assert_eq!(state.ui.detail_record, None);
}

#[test]
fn test_commands_are_logged_in_dispatch_order() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CountrySelected {
                country: "DE".to_string(),
            },
        )
        .expect("Filter sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SetCountry { country } => assert_eq!(country, "DE"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
