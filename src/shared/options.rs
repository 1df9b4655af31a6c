//! Zentrale Konfiguration für den Company-Map-Controller.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::LatLng;
use crate::map::SizeTier;

// ── Karte ───────────────────────────────────────────────────────────

/// Karten-Zentrum beim Start (Breitengrad).
pub const MAP_CENTER_LAT: f64 = 48.1486;
/// Karten-Zentrum beim Start (Längengrad).
pub const MAP_CENTER_LNG: f64 = 17.1077;
/// Start-Zoomstufe.
pub const MAP_ZOOM: u8 = 5;

// ── Filter ──────────────────────────────────────────────────────────

/// Vorbelegung des Mindestumsatz-Filters (5 Millionen).
pub const MIN_TURNOVER_DEFAULT: u64 = 5_000_000;

// ── Pins ────────────────────────────────────────────────────────────

/// Schwellwert der Firmengröße für die zweistufige Pin-Färbung.
pub const SIZE_TIER_THRESHOLD: u64 = 100;
/// Pin-Farbe für Firmen oberhalb des Schwellwerts (Rot).
pub const PIN_COLOR_LARGE: &str = "#dc2626";
/// Pin-Farbe für Firmen bis zum Schwellwert (Grün).
pub const PIN_COLOR_SMALL: &str = "#16a34a";

// ── Record-Quelle ───────────────────────────────────────────────────

/// Standard-Name der Record-Quelle.
pub const RECORDS_RESOURCE: &str = "locations.json";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `company_map.toml` neben dem Host-Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Karten-Zentrum (Breitengrad)
    pub map_center_lat: f64,
    /// Karten-Zentrum (Längengrad)
    pub map_center_lng: f64,
    /// Start-Zoomstufe
    pub map_zoom: u8,

    // ── Filter ──────────────────────────────────────────────────
    /// Vorbelegung des Mindestumsatz-Filters
    pub default_min_turnover: u64,

    // ── Pins ────────────────────────────────────────────────────
    /// Schwellwert der Firmengröße für die Pin-Größenklasse
    pub size_tier_threshold: u64,
    /// Pin-Farbe für Firmen oberhalb des Schwellwerts
    pub pin_color_large: String,
    /// Pin-Farbe für Firmen bis zum Schwellwert
    pub pin_color_small: String,

    // ── Record-Quelle ───────────────────────────────────────────
    /// Pfad bzw. URL der Record-Quelle
    #[serde(default = "default_records_path")]
    pub records_path: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            map_center_lat: MAP_CENTER_LAT,
            map_center_lng: MAP_CENTER_LNG,
            map_zoom: MAP_ZOOM,

            default_min_turnover: MIN_TURNOVER_DEFAULT,

            size_tier_threshold: SIZE_TIER_THRESHOLD,
            pin_color_large: PIN_COLOR_LARGE.to_string(),
            pin_color_small: PIN_COLOR_SMALL.to_string(),

            records_path: default_records_path(),
        }
    }
}

/// Serde-Default für `records_path` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_records_path() -> String {
    RECORDS_RESOURCE.to_string()
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben dem Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("company_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("company_map.toml")
    }

    /// Karten-Zentrum als Koordinate.
    pub fn map_center(&self) -> LatLng {
        LatLng::new(self.map_center_lat, self.map_center_lng)
    }

    /// Farbe für eine Pin-Größenklasse.
    pub fn pin_color(&self, tier: SizeTier) -> &str {
        match tier {
            SizeTier::Large => &self.pin_color_large,
            SizeTier::Small => &self.pin_color_small,
        }
    }
}
