//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RecordSourceLoaded { json } => vec![AppCommand::LoadRecords { json }],
        AppIntent::RecordSourceFailed { message } => {
            vec![AppCommand::FailRecordSource { message }]
        }
        AppIntent::ProviderAcquireRequested => vec![AppCommand::AcquireProvider],
        AppIntent::ProviderBecameReady => vec![AppCommand::MarkProviderReady],
        AppIntent::ProviderLoadFailed { message } => vec![AppCommand::FailProvider { message }],
        AppIntent::ProviderShutdownRequested => vec![AppCommand::ShutdownProvider],
        AppIntent::CountrySelected { country } => vec![AppCommand::SetCountry { country }],
        AppIntent::CitySelected { city } => vec![AppCommand::SetCity { city }],
        AppIntent::MinTurnoverChanged { min_turnover } => {
            vec![AppCommand::SetMinTurnover { min_turnover }]
        }
        AppIntent::RoutePlanningToggled => vec![AppCommand::ToggleSelectionMode],
        AppIntent::MarkerClicked { record_id } => {
            // Nur im Routenplanungs-Modus wählt ein Klick einen Stop;
            // sonst öffnet er das Detail-Fenster.
            if state.selection.active {
                vec![AppCommand::AddStop { record_id }]
            } else {
                vec![AppCommand::ShowDetail { record_id }]
            }
        }
        AppIntent::StopRemovalRequested { index } => vec![AppCommand::RemoveStop { index }],
        AppIntent::RouteComputeRequested => vec![AppCommand::RequestDirections],
        AppIntent::RouteClearRequested => vec![AppCommand::ClearRoute],
        AppIntent::DirectionsArrived { seq, result } => {
            vec![AppCommand::ApplyDirections { seq, result }]
        }
        AppIntent::DetailViewClosed => vec![AppCommand::CloseDetail],
    }
}
