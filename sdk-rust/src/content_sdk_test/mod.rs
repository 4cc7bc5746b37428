//! Test doubles for the capabilities exposed by this crate.
mod model;
mod store;

pub use model::*;
pub use store::*;
