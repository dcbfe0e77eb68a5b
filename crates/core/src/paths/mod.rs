//! On-disk path definitions for settings records.
//!
//! These modules define the relative filesystem structure of the settings
//! store. They contain **no I/O**; their sole responsibility is to provide
//! typed, canonical paths so that path invariants are defined in exactly one
//! place.

pub mod organization;
pub mod project;
pub mod team;
