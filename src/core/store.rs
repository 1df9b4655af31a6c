//! Der immutable Record-Store mit synthetischen IDs.

use std::collections::HashMap;

use super::{Record, RecordKey};

/// Container für alle geladenen Records.
///
/// Vergibt beim Laden stabile synthetische IDs (fortlaufend ab 1) und
/// hält das Mapping (Name, Adresse) → kanonische ID, damit die
/// ursprüngliche Matching-Semantik an der Store-Grenze erhalten bleibt.
/// Nach dem Aufbau wird der Store nicht mehr verändert.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in Quell-Reihenfolge; ID = Index + 1
    records: Vec<Record>,
    /// Kanonische ID (erstes Vorkommen) je Schlüssel
    ids_by_key: HashMap<RecordKey, u64>,
}

impl RecordStore {
    /// Baut den Store aus der geladenen Record-Liste auf.
    ///
    /// Kommt ein (Name, Adresse)-Schlüssel mehrfach vor, behält jeder
    /// Record seine eigene ID; kanonisch für das Matching ist das erste
    /// Vorkommen.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut ids_by_key = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            ids_by_key.entry(record.key()).or_insert(index as u64 + 1);
        }
        Self {
            records,
            ids_by_key,
        }
    }

    /// Findet einen Record über seine ID.
    pub fn get(&self, id: u64) -> Option<&Record> {
        if id == 0 {
            return None;
        }
        self.records.get(id as usize - 1)
    }

    /// Iteriert über alle Records mit ihren IDs in Quell-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (index as u64 + 1, record))
    }

    /// Kanonische ID zu einem (Name, Adresse)-Schlüssel.
    pub fn id_by_key(&self, key: &RecordKey) -> Option<u64> {
        self.ids_by_key.get(key).copied()
    }

    /// Kanonische ID zu einer beliebigen Record-ID.
    ///
    /// Für Records mit mehrfach vorkommendem Schlüssel liefert das die
    /// ID des ersten Vorkommens, sonst die ID selbst.
    pub fn canonical_id(&self, id: u64) -> Option<u64> {
        self.get(id).and_then(|record| self.id_by_key(&record.key()))
    }

    /// Gibt die Anzahl der Records zurück (für UI-Anzeige).
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn keine Records geladen sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
