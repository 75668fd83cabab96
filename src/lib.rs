//! Discord giveaway core.
//!
//! This crate implements the storage, weighting, winner-selection and scheduling
//! logic behind a Discord giveaway bot. It deliberately owns no message formatting
//! and no outward delivery: consumers register [`EventSink`] observers and react to
//! lifecycle events (start, end, cancel, reroll, ledger changes, debounced sync
//! requests) by talking to Discord themselves.
//!
//! # Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Data Layer** (`data/`) - SeaORM repositories over the live, archive and
//!   guild-settings tables
//! - **Service Layer** (`service/`) - entry ledger, winner selector and lifecycle
//!   routines
//! - **Model Layer** (`model/`) - domain `Giveaway` aggregate and the `EventSink`
//!   observer trait
//! - **Scheduler** (`scheduler/`) - per-giveaway end timers, the debounced dirty-set
//!   sync drain, and the archive purge sweep
//! - **Bot** (`bot/`) - serenity-backed member lookups and gateway event entrypoints
//!
//! [`GiveawayManager`] wires the layers together and is the only type most
//! consumers need.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod manager;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;

pub use config::GiveawayConfig;
pub use error::GiveawayError;
pub use manager::GiveawayManager;
pub use model::event::EventSink;
pub use model::giveaway::{Giveaway, NewGiveaway};
pub use service::ledger::EntryOutcome;
