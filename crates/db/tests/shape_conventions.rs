//! Structural checks on the serialized shapes.
//!
//! The contract of this crate is the shape itself: every row type must
//! serialize to exactly its declared column list, and write DTOs must never
//! introduce columns the table does not have.

use millennium_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use millennium_db::models::connection::{Connection, CreateConnection, UpdateConnection};
use millennium_db::models::{character, connection};

/// Sorted key set of a serialized value, which must be a JSON object.
fn sorted_keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("serialized shape should be a JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn sorted_columns(columns: &[&str]) -> Vec<String> {
    let mut columns: Vec<String> = columns.iter().map(ToString::to_string).collect();
    columns.sort();
    columns
}

fn sample_character() -> Character {
    Character {
        id: 1,
        name: Some("BACON, ROGER".to_string()),
        first_names: Some("Roger".to_string()),
        birth_date: Some("c. 1214".to_string()),
        death_date: Some("1292".to_string()),
        biography: Some("Franciscan friar and early empiricist".to_string()),
        kind: Some("P".to_string()),
        link: Some("https://en.wikipedia.org/wiki/Roger_Bacon".to_string()),
        image_link: None,
    }
}

fn sample_connection() -> Connection {
    Connection {
        id: 1,
        char1_id: Some(1),
        char2_id: Some(2),
        value: Some(4),
        why: Some("Teacher and student at Oxford".to_string()),
    }
}

#[test]
fn character_row_serializes_every_column() {
    let value = serde_json::to_value(sample_character()).unwrap();
    assert_eq!(sorted_keys(&value), sorted_columns(&character::COLUMNS));
}

#[test]
fn character_row_serializes_null_columns_explicitly() {
    let mut row = sample_character();
    row.name = None;
    row.image_link = None;
    let value = serde_json::to_value(row).unwrap();
    // Nulls stay in the object; the row shape never drops a column.
    assert_eq!(sorted_keys(&value), sorted_columns(&character::COLUMNS));
    assert!(value["name"].is_null());
}

#[test]
fn connection_row_serializes_every_column() {
    let value = serde_json::to_value(sample_connection()).unwrap();
    assert_eq!(sorted_keys(&value), sorted_columns(&connection::COLUMNS));
}

#[test]
fn character_write_dtos_stay_within_the_column_list() {
    let create = CreateCharacter {
        id: Some(1),
        name: Some("WASHINGTON".to_string()),
        first_names: Some("George".to_string()),
        birth_date: Some("1732".to_string()),
        death_date: Some("1799".to_string()),
        biography: Some("First president of the United States".to_string()),
        kind: Some("S".to_string()),
        link: Some("https://en.wikipedia.org/wiki/George_Washington".to_string()),
        image_link: Some("washington.jpg".to_string()),
    };
    let value = serde_json::to_value(create).unwrap();
    assert_eq!(sorted_keys(&value), sorted_columns(&character::COLUMNS));

    let update = UpdateCharacter {
        name: Some("WASHINGTON".to_string()),
        first_names: Some("George".to_string()),
        birth_date: Some("1732".to_string()),
        death_date: Some("1799".to_string()),
        biography: None,
        kind: Some("S".to_string()),
        link: None,
        image_link: None,
    };
    let value = serde_json::to_value(update).unwrap();
    let columns = sorted_columns(&character::COLUMNS);
    for key in sorted_keys(&value) {
        assert!(columns.contains(&key), "unexpected column {key}");
    }
}

#[test]
fn connection_write_dtos_stay_within_the_column_list() {
    let create = CreateConnection {
        id: Some(1),
        char1_id: Some(1),
        char2_id: Some(2),
        value: Some(4),
        why: Some("Allies".to_string()),
    };
    let value = serde_json::to_value(create).unwrap();
    assert_eq!(sorted_keys(&value), sorted_columns(&connection::COLUMNS));

    let update = UpdateConnection {
        char1_id: None,
        char2_id: None,
        value: Some(2),
        why: Some("Rivals, later reconciled".to_string()),
    };
    let value = serde_json::to_value(update).unwrap();
    let columns = sorted_columns(&connection::COLUMNS);
    for key in sorted_keys(&value) {
        assert!(columns.contains(&key), "unexpected column {key}");
    }
}

#[test]
fn empty_write_payloads_serialize_to_empty_objects() {
    for value in [
        serde_json::to_value(CreateCharacter::default()).unwrap(),
        serde_json::to_value(UpdateCharacter::default()).unwrap(),
        serde_json::to_value(CreateConnection::default()).unwrap(),
        serde_json::to_value(UpdateConnection::default()).unwrap(),
    ] {
        assert_eq!(value, serde_json::json!({}));
    }
}

#[test]
fn table_names_match_the_database() {
    assert_eq!(character::TABLE, "character");
    assert_eq!(connection::TABLE, "connection");
}
