//! Database repository layer.
//!
//! Repository structs handle all reads and writes for the three giveaway tables.
//! They operate on SeaORM entity models; conversion to domain models happens in
//! the callers via `TryFrom`, keeping string-snowflake parsing out of this layer.

pub mod archive;
pub mod giveaway;
pub mod settings;
