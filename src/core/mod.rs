//! Core-Domänentypen: Records, Store, Koordinaten und die Filter-Engine.

pub mod filter;
pub mod geo;
pub mod record;
pub mod store;

pub use filter::{
    apply_filter, available_cities, available_countries, max_turnover, FilterCriteria,
};
pub use geo::LatLng;
pub use record::{parse_amount, Record, RecordKey};
pub use store::RecordStore;
