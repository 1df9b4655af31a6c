use crate::core::LatLng;

/// Zahlenwert mit menschenlesbarem Text, wie der Provider ihn liefert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue {
    /// Rohwert (Meter bzw. Sekunden)
    pub value: u64,
    /// Anzeigetext des Providers (z.B. "2.0 km", "20 mins")
    pub text: String,
}

impl TextValue {
    /// Erstellt einen Wert mit Anzeigetext.
    pub fn new(value: u64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

/// Ein Teilstück zwischen zwei aufeinanderfolgenden Stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLeg {
    /// Distanz des Teilstücks
    pub distance: TextValue,
    /// Fahrdauer des Teilstücks
    pub duration: TextValue,
}

/// Eine berechnete Route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsRoute {
    /// Teilstücke in Fahr-Reihenfolge
    pub legs: Vec<DirectionsLeg>,
    /// Vom Provider optimierte Reihenfolge der Zwischenstops
    /// (Indizes in die Waypoints der Anfrage; Origin und Ziel bleiben fest)
    pub waypoint_order: Vec<usize>,
}

/// Antwortstatus des Providers.
///
/// Alles außer `Ok` bedeutet "keine Route berechenbar" und erzeugt
/// keine Zusammenfassung; eine feinere Unterscheidung braucht der
/// Controller nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionsStatus {
    /// Route liegt vor
    Ok,
    /// Keine Route zwischen den Stops gefunden
    ZeroResults,
    /// Mindestens ein Stop war nicht auflösbar
    NotFound,
    /// Sonstiger Provider-Fehler
    Error,
}

/// Vollständige Provider-Antwort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsResult {
    /// Antwortstatus
    pub status: DirectionsStatus,
    /// Berechnete Routen (der Controller nutzt nur die erste)
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResult {
    /// Erste Route bei Status `Ok`, sonst `None`.
    pub fn ok_route(&self) -> Option<&DirectionsRoute> {
        if self.status == DirectionsStatus::Ok {
            self.routes.first()
        } else {
            None
        }
    }
}

/// Anfrage an den Routing-Provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    /// Startpunkt (erster Stop)
    pub origin: LatLng,
    /// Zielpunkt (letzter Stop)
    pub destination: LatLng,
    /// Zwischenstops in Auswahl-Reihenfolge
    pub waypoints: Vec<LatLng>,
    /// Provider darf Zwischenstops für die kürzeste Gesamtstrecke umsortieren
    pub optimize_waypoints: bool,
}
