//! Firmendatensätze aus der Record-Quelle.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use super::LatLng;

/// Ein einzelner geo-referenzierter Firmendatensatz.
/// Unveränderlich nach dem Laden.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Firmenname
    pub name: String,
    /// Jahresumsatz als formatierter String (z.B. "€6,000,000")
    pub annual_turnover: String,
    /// Firmengröße als String mit Einheit (z.B. "250 employees")
    pub company_size: String,
    /// Straße und Hausnummer
    pub address: String,
    /// Postleitzahl
    pub zip: String,
    /// Stadt
    pub city: String,
    /// Land
    pub country: String,
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl Record {
    /// Sichtbare Identität des Records. Die Quelle trägt keine IDs;
    /// Records werden über (Name, Adresse) gematcht.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }

    /// Koordinate des Records.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Geparster Jahresumsatz.
    pub fn parsed_turnover(&self) -> u64 {
        parse_amount(&self.annual_turnover)
    }

    /// Geparste Firmengröße.
    pub fn parsed_size(&self) -> u64 {
        parse_amount(&self.company_size)
    }
}

/// Zusammengesetzter Schlüssel für Dedup und Lookup: (Name, Adresse).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    /// Firmenname
    pub name: String,
    /// Straße und Hausnummer
    pub address: String,
}

static NON_DIGITS: OnceLock<Regex> = OnceLock::new();

/// Extrahiert den Zahlenwert aus einem formatierten Betrag.
///
/// Alle Nicht-Ziffern werden entfernt und der Rest dezimal geparst.
/// Ein String ohne Ziffern (oder außerhalb des u64-Bereichs) ergibt 0,
/// nie einen Fehler.
pub fn parse_amount(raw: &str) -> u64 {
    let re = NON_DIGITS.get_or_init(|| Regex::new(r"\D").expect("statisches Pattern"));
    re.replace_all(raw, "").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_currency_formatting() {
        assert_eq!(parse_amount("€6,000,000"), 6_000_000);
        assert_eq!(parse_amount("$1.250.000"), 1_250_000);
        assert_eq!(parse_amount("250 employees"), 250);
    }

    #[test]
    fn parse_amount_without_digits_is_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("n/a"), 0);
        assert_eq!(parse_amount("unbekannt"), 0);
    }

    #[test]
    fn record_key_matches_on_name_and_address() {
        let key_a = RecordKey {
            name: "Acme GmbH".into(),
            address: "Hauptstraße 1".into(),
        };
        let key_b = RecordKey {
            name: "Acme GmbH".into(),
            address: "Hauptstraße 1".into(),
        };
        let key_c = RecordKey {
            name: "Acme GmbH".into(),
            address: "Nebenweg 2".into(),
        };

        assert_eq!(key_a, key_b);
        assert_ne!(key_a, key_c);
    }
}
