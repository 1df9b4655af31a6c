//! Geteilte Bausteine: Laufzeit-Optionen und Konstanten.

pub mod options;

pub use options::MapOptions;
