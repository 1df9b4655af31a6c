//! Company-Map Controller.
//!
//! Filter-, Selektions- und Routen-Zustand für einen Browser
//! geo-referenzierter Firmendatensätze. Die Präsentationsschicht (Karte,
//! Panels) und die Provider-I/O bleiben beim Host: er übersetzt Eingaben
//! in `AppIntent`s, führt im State abgelegte Provider-Anfragen aus und
//! liest den `AppState` zum Rendern.

pub mod app;
pub mod core;
pub mod directions;
pub mod map;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, PendingQuery, SourcePhase,
};
pub use core::{
    apply_filter, available_cities, available_countries, max_turnover, parse_amount,
    FilterCriteria, LatLng, Record, RecordKey, RecordStore,
};
pub use directions::{
    summarize, DirectionsLeg, DirectionsRequest, DirectionsResult, DirectionsRoute,
    DirectionsStatus, RouteLeg, RouteSummary, TextValue,
};
pub use map::{project, MarkerPin, ProviderPhase, ProviderRuntime, SizeTier};
pub use shared::MapOptions;
