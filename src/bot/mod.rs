//! Discord-facing adapters.
//!
//! The core only ever reads from Discord (member lookups during gating and
//! termination); all writes are delegated to [`EventSink`](crate::EventSink)
//! consumers. `handler` provides free functions for the gateway events the core
//! cares about, in the shape a serenity `EventHandler` impl can call directly.

pub mod handler;
pub mod member;
