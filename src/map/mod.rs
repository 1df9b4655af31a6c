//! Karten-nahe Bausteine: Pin-Projektion und der Lebenszyklus der
//! externen Karten-Bibliothek.

pub mod marker;
pub mod runtime;

pub use marker::{project, MarkerPin, SizeTier};
pub use runtime::{ProviderPhase, ProviderRuntime};
