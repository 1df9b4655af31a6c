//! Application State — zentrale Datenhaltung.

use indexmap::IndexSet;

use super::command_log::CommandLog;
use crate::core::{FilterCriteria, RecordStore};
use crate::directions::{DirectionsRequest, RouteSummary};
use crate::map::ProviderRuntime;
use crate::shared::MapOptions;

/// Ladezustand der Record-Quelle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourcePhase {
    /// Quelle noch nicht geladen
    #[default]
    Loading,
    /// Quelle geladen, Store gefüllt
    Ready,
    /// Laden fehlgeschlagen; der Store bleibt leer, die Logik inert
    Failed(String),
}

/// Filterbezogener Anwendungszustand.
///
/// `visible` ist die aus (Store, Kriterien) abgeleitete sichtbare Menge.
/// Sie wird bei jeder Kriterien-Änderung vollständig neu berechnet und
/// nie inkrementell gepatcht.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Aktive Kriterien
    pub criteria: FilterCriteria,
    /// IDs der sichtbaren Records in Store-Reihenfolge
    pub visible: Vec<u64>,
}

/// Auswahlbezogener Anwendungszustand: Routenplanungs-Modus und Stops.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Routenplanungs-Modus aktiv (Klicks wählen Stops statt Details)
    pub active: bool,
    /// Gewählte Stops in Klick-Reihenfolge, dedupliziert
    pub stops: IndexSet<u64>,
}

impl SelectionState {
    /// Erstellt einen inaktiven Auswahlzustand ohne Stops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops als Vektor in Klick-Reihenfolge.
    pub fn stop_ids(&self) -> Vec<u64> {
        self.stops.iter().copied().collect()
    }
}

/// Ausstehende Provider-Anfrage mit Sequenznummer.
///
/// Die Sequenznummer schützt gegen veraltete Callbacks: eine Antwort,
/// deren Nummer nicht zur ausstehenden Anfrage passt, stammt von einer
/// inzwischen geänderten Stop-Liste und wird verworfen.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    /// Sequenznummer der Anfrage
    pub seq: u64,
    /// Vom Host auszuführende Anfrage
    pub request: DirectionsRequest,
}

/// Routenbezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    /// Letzte erfolgreich berechnete Zusammenfassung
    pub summary: Option<RouteSummary>,
    /// Ausstehende Anfrage (vom Host auszuführen)
    pub pending: Option<PendingQuery>,
    /// Monoton steigende Sequenznummer
    seq: u64,
}

impl RouteState {
    /// Erstellt einen leeren Routen-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt die nächste Sequenznummer.
    pub fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Verwirft Zusammenfassung und ausstehende Anfrage.
    ///
    /// Jede Änderung an Stops, Kriterien oder Modus läuft hier durch;
    /// eine danach eintreffende Antwort findet keine passende Anfrage
    /// mehr vor und wird ignoriert.
    pub fn invalidate(&mut self) {
        self.summary = None;
        self.pending = None;
    }
}

/// UI-naher Anwendungszustand, den die Präsentationsschicht liest.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ladezustand der Record-Quelle (für Lade-/Fehleranzeige)
    pub source_phase: SourcePhase,
    /// Im Detail-Fenster fokussierter Record
    /// (Klick außerhalb des Routenplanungs-Modus)
    pub detail_record: Option<u64>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle geladenen Records (leer bis zum ersten Laden)
    pub store: RecordStore,
    /// Filter-State
    pub filter: FilterState,
    /// Selection-State
    pub selection: SelectionState,
    /// Route-State
    pub route: RouteState,
    /// UI-State
    pub ui: UiState,
    /// Lebenszyklus der externen Karten-Bibliothek
    pub provider: ProviderRuntime,
    /// Laufzeit-Optionen
    pub options: MapOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: MapOptions) -> Self {
        let filter = FilterState {
            criteria: FilterCriteria {
                min_turnover: options.default_min_turnover,
                ..FilterCriteria::default()
            },
            visible: Vec::new(),
        };

        Self {
            store: RecordStore::default(),
            filter,
            selection: SelectionState::new(),
            route: RouteState::new(),
            ui: UiState::default(),
            provider: ProviderRuntime::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl geladener Records zurück (für UI-Anzeige).
    pub fn record_count(&self) -> usize {
        self.store.record_count()
    }

    /// Gibt die Anzahl sichtbarer Records zurück (für UI-Anzeige).
    pub fn visible_count(&self) -> usize {
        self.filter.visible.len()
    }

    /// Ob eine Routenberechnung möglich ist
    /// (Modus aktiv und mindestens zwei Stops).
    pub fn can_compute_route(&self) -> bool {
        self.selection.active && self.selection.stops.len() >= 2
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
