//! Filter-Engine: abhängige Optionslisten und das Drei-Prädikat-Filter.
//!
//! Alle Funktionen sind pur und rechnen die Ergebnisse bei jedem Aufruf
//! vollständig aus dem Store und den Kriterien neu; es gibt keinen
//! inkrementell gepflegten Cache.

use indexmap::IndexSet;

use super::{parse_amount, Record, RecordStore};

/// Aktive Filterkriterien.
///
/// Ein leerer String bedeutet "alle". Invariante: ohne gewähltes Land
/// ist die Stadt bedeutungslos und wird als leer behandelt; ein
/// Landwechsel setzt die Stadt im selben Übergang zurück.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Gewähltes Land (leer = alle)
    pub country: String,
    /// Gewählte Stadt (leer = alle)
    pub city: String,
    /// Mindest-Jahresumsatz
    pub min_turnover: u64,
}

/// Alle vorkommenden Länder, Erstauftritts-Reihenfolge, exaktes Matching.
pub fn available_countries(store: &RecordStore) -> Vec<&str> {
    let countries: IndexSet<&str> = store
        .iter()
        .map(|(_, record)| record.country.as_str())
        .collect();
    countries.into_iter().collect()
}

/// Alle Städte des gegebenen Landes, Erstauftritts-Reihenfolge.
/// Leeres Land liefert eine leere Liste.
pub fn available_cities<'a>(store: &'a RecordStore, country: &str) -> Vec<&'a str> {
    if country.is_empty() {
        return Vec::new();
    }
    let cities: IndexSet<&str> = store
        .iter()
        .filter(|(_, record)| record.country == country)
        .map(|(_, record)| record.city.as_str())
        .collect();
    cities.into_iter().collect()
}

/// Höchster geparster Umsatz aller Records.
/// Dient nur als Obergrenze für den Eingabe-Regler.
pub fn max_turnover(store: &RecordStore) -> u64 {
    store
        .iter()
        .map(|(_, record)| record.parsed_turnover())
        .max()
        .unwrap_or(0)
}

/// Wendet die Kriterien auf den Store an.
///
/// Das Ergebnis ist eine geordnete Teilfolge der Store-Reihenfolge
/// (IDs der sichtbaren Records).
pub fn apply_filter(store: &RecordStore, criteria: &FilterCriteria) -> Vec<u64> {
    store
        .iter()
        .filter(|(_, record)| matches(record, criteria))
        .map(|(id, _)| id)
        .collect()
}

/// Konjunktives Prädikat aus Land, Stadt und Mindestumsatz.
fn matches(record: &Record, criteria: &FilterCriteria) -> bool {
    // Stadt nur mit gewähltem Land berücksichtigen
    let city = if criteria.country.is_empty() {
        ""
    } else {
        criteria.city.as_str()
    };

    (criteria.country.is_empty() || record.country == criteria.country)
        && (city.is_empty() || record.city == city)
        && parse_amount(&record.annual_turnover) >= criteria.min_turnover
}
