//! Domain models for the giveaway core.
//!
//! The data layer converts SeaORM entity rows into the types here so the service
//! layer never handles raw string snowflakes or JSON column wrappers.

pub mod event;
pub mod giveaway;

pub use event::EventSink;
pub use giveaway::{Giveaway, NewGiveaway};
