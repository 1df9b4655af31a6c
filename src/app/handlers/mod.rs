//! Feature-Handler: dünne Schicht zwischen Controller und Use-Cases.

pub mod filter;
pub mod route;
pub mod selection;
pub mod source;
