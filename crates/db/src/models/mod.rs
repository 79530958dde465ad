//! Table row shapes and write DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` + `Deserialize` row struct matching the table
//! - A create DTO for inserts (all fields optional, omitted when `None`)
//! - An update DTO for patches (same convention)
//! - `TABLE` and `COLUMNS` constants naming the wire surface

pub mod character;
pub mod connection;
