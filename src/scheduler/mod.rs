//! Background scheduling: per-giveaway end timers, the debounced sync drain and
//! the archive purge sweep.
//!
//! Timers and the dirty set are derived state. Only the `end_at` timestamp in
//! storage is durable; on restart the manager rebuilds everything from a pending
//! scan.

pub mod end_timer;
pub mod purge;
pub mod sync;
