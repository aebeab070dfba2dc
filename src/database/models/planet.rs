use serde::{Deserialize, Serialize};
use sqlx::any::AnyArguments;
use sqlx::query::QueryAs;
use sqlx::{Any, FromRow};

use crate::database::repository::{NewRow, Table};

#[derive(Debug, Clone, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    pub id: i64,
    pub name: String,
}

impl Planet {
    pub fn serialize(&self) -> PlanetView {
        PlanetView {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl Table for Planet {
    const TABLE: &'static str = "planets";
    const COLUMNS: &'static str = "id, name";
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
}

impl NewPlanet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NewRow for NewPlanet {
    type Row = Planet;
    const INSERT_COLUMNS: &'static [&'static str] = &["name"];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, Planet, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, Planet, AnyArguments<'q>> {
        query.bind(self.name)
    }
}
