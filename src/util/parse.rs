use crate::error::GiveawayError;

/// Parses a stored snowflake string back into a `u64`.
///
/// # Arguments
/// - `value` - The string column value to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed
/// - `Err(GiveawayError::InvalidId)` - The stored value is not a valid u64
pub fn parse_snowflake(value: &str) -> Result<u64, GiveawayError> {
    value.parse::<u64>().map_err(|e| GiveawayError::InvalidId {
        value: value.to_string(),
        source: e,
    })
}
