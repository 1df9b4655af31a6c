use crate::directions::DirectionsResult;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Record-Quelle wurde geladen (JSON-Rohtext)
    RecordSourceLoaded { json: String },
    /// Record-Quelle konnte nicht geladen werden
    RecordSourceFailed { message: String },
    /// Karten-Bibliothek anfordern (idempotent)
    ProviderAcquireRequested,
    /// Karten-Bibliothek meldet Einsatzbereitschaft
    ProviderBecameReady,
    /// Karten-Bibliothek konnte nicht geladen werden
    ProviderLoadFailed { message: String },
    /// Karten-Bibliothek kontrolliert abbauen
    ProviderShutdownRequested,
    /// Land im Filter gewählt (leer = alle Länder)
    CountrySelected { country: String },
    /// Stadt im Filter gewählt (leer = alle Städte)
    CitySelected { city: String },
    /// Mindestumsatz-Regler geändert
    MinTurnoverChanged { min_turnover: u64 },
    /// Routenplanungs-Modus umschalten
    RoutePlanningToggled,
    /// Marker wurde angeklickt (Record aus dem Klick-Event des Providers)
    MarkerClicked { record_id: u64 },
    /// Stop aus der Liste entfernen (Index in Klick-Reihenfolge)
    StopRemovalRequested { index: usize },
    /// Routenberechnung angefordert ("Calculate Route")
    RouteComputeRequested,
    /// Route verwerfen ("Clear Route")
    RouteClearRequested,
    /// Antwort des Routing-Providers eingetroffen
    DirectionsArrived { seq: u64, result: DirectionsResult },
    /// Detail-Fenster geschlossen
    DetailViewClosed,
}
