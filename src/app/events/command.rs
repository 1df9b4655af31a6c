use crate::directions::DirectionsResult;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Records aus JSON-Rohtext laden
    LoadRecords { json: String },
    /// Record-Quelle als fehlgeschlagen markieren
    FailRecordSource { message: String },
    /// Karten-Bibliothek anfordern
    AcquireProvider,
    /// Karten-Bibliothek als einsatzbereit markieren
    MarkProviderReady,
    /// Karten-Bibliothek als fehlgeschlagen markieren
    FailProvider { message: String },
    /// Karten-Bibliothek abbauen
    ShutdownProvider,
    /// Land setzen (setzt die Stadt im selben Übergang zurück)
    SetCountry { country: String },
    /// Stadt setzen
    SetCity { city: String },
    /// Mindestumsatz setzen
    SetMinTurnover { min_turnover: u64 },
    /// Routenplanungs-Modus umschalten (voller Reset in beide Richtungen)
    ToggleSelectionMode,
    /// Record als Stop anhängen (Dedup nach (Name, Adresse))
    AddStop { record_id: u64 },
    /// Detail-Fenster für einen Record öffnen
    ShowDetail { record_id: u64 },
    /// Detail-Fenster schließen
    CloseDetail,
    /// Stop per Index entfernen
    RemoveStop { index: usize },
    /// Stops und Zusammenfassung verwerfen (Modus bleibt)
    ClearRoute,
    /// Provider-Anfrage aus den aktuellen Stops erzeugen
    RequestDirections,
    /// Provider-Antwort anwenden (mit Sequenz-Prüfung)
    ApplyDirections { seq: u64, result: DirectionsResult },
}
