//! Join rows linking a user to a character or a planet.
//!
//! Nothing prevents the same (user, target) pair from being stored twice.

use serde::{Deserialize, Serialize};
use sqlx::any::AnyArguments;
use sqlx::query::QueryAs;
use sqlx::{Any, FromRow};

use crate::database::repository::{Favorite, NewRow, Table};

#[derive(Debug, Clone, FromRow)]
pub struct CharacterFavorite {
    pub id: i64,
    pub user_id: i64,
    pub character_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFavoriteView {
    pub id: i64,
    pub user_id: i64,
    pub character_id: i64,
}

impl CharacterFavorite {
    pub fn serialize(&self) -> CharacterFavoriteView {
        CharacterFavoriteView {
            id: self.id,
            user_id: self.user_id,
            character_id: self.character_id,
        }
    }
}

impl Table for CharacterFavorite {
    const TABLE: &'static str = "character_favorites";
    const COLUMNS: &'static str = "id, user_id, character_id";
}

impl Favorite for CharacterFavorite {}

#[derive(Debug, Clone)]
pub struct NewCharacterFavorite {
    pub user_id: i64,
    pub character_id: i64,
}

impl NewCharacterFavorite {
    pub fn new(user_id: i64, character_id: i64) -> Self {
        Self { user_id, character_id }
    }
}

impl NewRow for NewCharacterFavorite {
    type Row = CharacterFavorite;
    const INSERT_COLUMNS: &'static [&'static str] = &["user_id", "character_id"];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, CharacterFavorite, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, CharacterFavorite, AnyArguments<'q>> {
        query.bind(self.user_id).bind(self.character_id)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PlanetFavorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetFavoriteView {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
}

impl PlanetFavorite {
    pub fn serialize(&self) -> PlanetFavoriteView {
        PlanetFavoriteView {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.planet_id,
        }
    }
}

impl Table for PlanetFavorite {
    const TABLE: &'static str = "planet_favorites";
    const COLUMNS: &'static str = "id, user_id, planet_id";
}

impl Favorite for PlanetFavorite {}

#[derive(Debug, Clone)]
pub struct NewPlanetFavorite {
    pub user_id: i64,
    pub planet_id: i64,
}

impl NewPlanetFavorite {
    pub fn new(user_id: i64, planet_id: i64) -> Self {
        Self { user_id, planet_id }
    }
}

impl NewRow for NewPlanetFavorite {
    type Row = PlanetFavorite;
    const INSERT_COLUMNS: &'static [&'static str] = &["user_id", "planet_id"];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, PlanetFavorite, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, PlanetFavorite, AnyArguments<'q>> {
        query.bind(self.user_id).bind(self.planet_id)
    }
}
