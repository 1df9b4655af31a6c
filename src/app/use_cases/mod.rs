//! Use-Case-Funktionen: alle Mutationen des AppState laufen hier durch.

pub mod filter;
pub mod load;
pub mod route;
pub mod selection;
