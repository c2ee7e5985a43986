//! Workspace crate: re-exports [`countrydb_core`] so the demos can use
//! `countrydb_rs::prelude::*`.
pub use countrydb_core::*;
