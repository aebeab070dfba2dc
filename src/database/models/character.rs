use serde::{Deserialize, Serialize};
use sqlx::any::AnyArguments;
use sqlx::query::QueryAs;
use sqlx::{Any, FromRow};

use crate::database::repository::{NewRow, Table};

#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterView {
    pub id: i64,
    pub name: String,
}

impl Character {
    pub fn serialize(&self) -> CharacterView {
        CharacterView {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Table for Character {
    const TABLE: &'static str = "characters";
    const COLUMNS: &'static str = "id, name";
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NewRow for NewCharacter {
    type Row = Character;
    const INSERT_COLUMNS: &'static [&'static str] = &["name"];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, Character, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, Character, AnyArguments<'q>> {
        query.bind(self.name)
    }
}
