//! Test factories for creating serenity API objects.
//!
//! When testing code that handles Discord data you often need real serenity
//! structs without a gateway connection. These factories build them by
//! deserializing JSON, simulating what Discord's API would return.

pub mod role;

// Re-export commonly used functions for convenience
pub use role::create_test_role;
