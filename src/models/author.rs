//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// Book author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    #[serde(rename = "author_id")]
    pub id: i32,
    pub lastname: String,
    /// `null` when the given name is not recorded
    pub firstname: Option<String>,
}

/// Raw `author` table row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorRow {
    pub authorid: i32,
    pub surname: String,
    pub name: Option<String>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: row.authorid,
            lastname: row.surname,
            firstname: row.name,
        }
    }
}

/// Author together with the books they wrote, in authorship order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorWithBooks {
    #[serde(flatten)]
    pub author: Author,
    pub books: Vec<Book>,
}
