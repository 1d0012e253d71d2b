//! User domain entity and related types.

use serde::{Deserialize, Deserializer, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address (free text)
    pub email: String,
}

impl User {
    /// Build a user from a store-assigned id and caller-supplied fields.
    pub fn new(id: i64, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
        }
    }
}

/// Caller-controlled user fields, used for both create and update.
///
/// Missing or `null` fields decode as empty strings and an `id` in the
/// body is ignored: the id always comes from the store (create) or the path
/// (update).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserInput {
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "openapi", schema(example = "John"))]
    pub name: String,
    /// Email address
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "openapi", schema(example = "john@example.com"))]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
