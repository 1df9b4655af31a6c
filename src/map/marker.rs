//! Projektion der sichtbaren Records auf renderbare Karten-Pins.

use crate::core::{LatLng, RecordStore};
use crate::shared::MapOptions;

/// Größenklasse eines Pins (zweistufige Farbcodierung nach Firmengröße).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// Firmengröße bis einschließlich Schwellwert
    Small,
    /// Firmengröße oberhalb des Schwellwerts
    Large,
}

/// Renderbarer Karten-Pin für einen sichtbaren Record.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPin {
    /// ID des zugehörigen Records (wird im Klick-Event zurückgereicht)
    pub record_id: u64,
    /// Koordinate des Pins
    pub position: LatLng,
    /// Titel für Tooltip und Info-Fenster
    pub title: String,
    /// Größenklasse für die Farbwahl
    pub tier: SizeTier,
}

/// Projiziert die sichtbare Menge auf Pins, in sichtbarer Reihenfolge.
/// IDs ohne Store-Eintrag werden übersprungen.
pub fn project(store: &RecordStore, visible: &[u64], options: &MapOptions) -> Vec<MarkerPin> {
    visible
        .iter()
        .filter_map(|&id| {
            let record = store.get(id)?;
            let tier = if record.parsed_size() > options.size_tier_threshold {
                SizeTier::Large
            } else {
                SizeTier::Small
            };
            Some(MarkerPin {
                record_id: id,
                position: record.position(),
                title: record.name.clone(),
                tier,
            })
        })
        .collect()
}
