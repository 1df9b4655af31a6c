//! Vertrag mit dem externen Routing-Provider und die Aggregation
//! seiner Antworten.

pub mod aggregate;
pub mod types;

pub use aggregate::{summarize, RouteLeg, RouteSummary};
pub use types::{
    DirectionsLeg, DirectionsRequest, DirectionsResult, DirectionsRoute, DirectionsStatus,
    TextValue,
};
