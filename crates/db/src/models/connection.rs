//! Connection row shape and write DTOs.

use millennium_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// Table name.
pub const TABLE: &str = "connection";

/// Every column of the `connection` table, in declaration order.
pub const COLUMNS: [&str; 5] = ["id", "char1_id", "char2_id", "value", "why"];

/// A row from the `connection` table: a weighted, explained link between
/// two characters.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Connection {
    pub id: DbId,
    /// References `character.id`. Nullable; not enforced at this layer.
    pub char1_id: Option<DbId>,
    /// References `character.id`. Nullable; not enforced at this layer.
    pub char2_id: Option<DbId>,
    /// Relationship strength.
    pub value: Option<i32>,
    /// Free-text rationale for the connection.
    pub why: Option<String>,
}

impl Connection {
    /// Whether `character_id` is on either end of this connection.
    pub fn involves(&self, character_id: DbId) -> bool {
        self.char1_id == Some(character_id) || self.char2_id == Some(character_id)
    }

    /// Return the endpoint opposite `character_id`.
    ///
    /// When `char1_id` matches, the result is `char2_id`, otherwise
    /// `char1_id`. `None` means that endpoint is null in the row.
    pub fn other_endpoint(&self, character_id: DbId) -> Option<DbId> {
        if self.char1_id == Some(character_id) {
            self.char2_id
        } else {
            self.char1_id
        }
    }
}

/// DTO for inserting a connection. Fields left `None` are omitted from the
/// payload so column defaults apply; `id` comes from the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CreateConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char1_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char2_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
}

/// DTO for updating an existing connection. All fields are optional; a
/// field left `None` is omitted and the column keeps its value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UpdateConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char1_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char2_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
}
