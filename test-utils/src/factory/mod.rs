//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories
//! pick unique IDs automatically so tests can seed several rows without
//! collisions.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let giveaway = factory::giveaway::create_giveaway(&db).await?;
//!
//! // Customize with the builder
//! let giveaway = factory::giveaway::GiveawayFactory::new(&db)
//!     .channel_id(9)
//!     .winners(3)
//!     .build()
//!     .await?;
//! ```

pub mod giveaway;
pub mod guild_settings;
pub mod helpers;

// Re-export commonly used factory functions for concise usage
pub use giveaway::create_giveaway;
pub use guild_settings::create_guild_settings;
