//! Character row shape and write DTOs.

use millennium_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// Table name.
pub const TABLE: &str = "character";

/// Every column of the `character` table, in declaration order.
pub const COLUMNS: [&str; 9] = [
    "id",
    "name",
    "first_names",
    "birth_date",
    "death_date",
    "biography",
    "type",
    "link",
    "image_link",
];

/// A row from the `character` table.
///
/// Every column except the primary key is nullable TEXT. Birth and death
/// dates are free-form historical strings ("c. 1214"), not timestamps.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Character {
    pub id: DbId,
    pub name: Option<String>,
    pub first_names: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub biography: Option<String>,
    /// One-letter category code; see [`millennium_core::category::Category`].
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub link: Option<String>,
    pub image_link: Option<String>,
}

/// DTO for inserting a character. Fields left `None` are omitted from the
/// payload so column defaults apply; `id` comes from the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CreateCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
}

/// DTO for updating an existing character. All fields are optional; a
/// field left `None` is omitted and the column keeps its value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct UpdateCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
}
