//! Test factory for creating serenity Role objects.

use serenity::all::Role;

/// Creates a test serenity Role with customizable fields.
///
/// Builds a Role by deserializing JSON with the provided values. All other
/// fields get reasonable defaults (not hoisted, not managed, not mentionable,
/// zero permissions).
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::role::create_test_role;
///
/// let role = create_test_role(123456789, "Booster", 0xF47FFF, 5);
/// assert_eq!(role.name, "Booster");
/// ```
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
