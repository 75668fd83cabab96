//! Business logic layer: entry weighting, winner selection, lifecycle routines.

pub mod ledger;
pub mod lifecycle;
pub mod selector;
