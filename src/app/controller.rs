//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Record-Quelle & Karten-Bibliothek ===
            AppCommand::LoadRecords { json } => handlers::source::load_records(state, &json),
            AppCommand::FailRecordSource { message } => {
                handlers::source::fail_source(state, message)
            }
            AppCommand::AcquireProvider => handlers::source::acquire_provider(state),
            AppCommand::MarkProviderReady => handlers::source::mark_provider_ready(state),
            AppCommand::FailProvider { message } => handlers::source::fail_provider(state, message),
            AppCommand::ShutdownProvider => handlers::source::shutdown_provider(state),

            // === Filter ===
            AppCommand::SetCountry { country } => handlers::filter::set_country(state, country),
            AppCommand::SetCity { city } => handlers::filter::set_city(state, city),
            AppCommand::SetMinTurnover { min_turnover } => {
                handlers::filter::set_min_turnover(state, min_turnover)
            }

            // === Selektion ===
            AppCommand::ToggleSelectionMode => handlers::selection::toggle_mode(state),
            AppCommand::AddStop { record_id } => handlers::selection::add_stop(state, record_id),
            AppCommand::ShowDetail { record_id } => {
                handlers::selection::show_detail(state, record_id)
            }
            AppCommand::CloseDetail => handlers::selection::close_detail(state),
            AppCommand::RemoveStop { index } => handlers::selection::remove_stop(state, index),
            AppCommand::ClearRoute => handlers::selection::clear_route(state),

            // === Route ===
            AppCommand::RequestDirections => handlers::route::request(state),
            AppCommand::ApplyDirections { seq, result } => {
                handlers::route::apply(state, seq, result)
            }
        }

        Ok(())
    }
}
