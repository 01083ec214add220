//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON value written in place of an absent edition number
pub const NO_EDITION: i32 = -1;

/// Catalog book, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isbn: i32,
    /// Title without surrounding whitespace
    pub title: String,
    /// Edition number; serialized as `-1` when unknown
    #[serde(with = "edition")]
    #[schema(value_type = i32, example = 2)]
    pub edition: Option<i32>,
    /// Number of copies owned by the library
    pub total_copies: i32,
    /// Number of copies currently on the shelf
    pub copies_left: i32,
}

/// Raw `book` table row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookRow {
    pub isbn: i32,
    pub title: String,
    pub edition_no: Option<i32>,
    pub numofcop: i32,
    pub numleft: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            isbn: row.isbn,
            title: row.title.trim().to_string(),
            edition: row.edition_no,
            total_copies: row.numofcop,
            copies_left: row.numleft,
        }
    }
}

mod edition {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NO_EDITION;

    pub fn serialize<S: Serializer>(edition: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(edition.unwrap_or(NO_EDITION))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Ok((value != NO_EDITION).then_some(value))
    }
}
