use serde::{Deserialize, Serialize};
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::QueryAs;
use sqlx::{Any, FromRow, Row};

use crate::database::repository::{NewRow, Table};

/// Row of the `users` table
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// JSON projection of a [`User`]. The password is exposed as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl<'r> FromRow<'r, AnyRow> for User {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            is_active: decode_flag(row, "is_active")?,
        })
    }
}

// PostgreSQL reports a native BOOLEAN; the SQLite column is an INTEGER 0/1
fn decode_flag(row: &AnyRow, column: &str) -> Result<bool, sqlx::Error> {
    match row.try_get::<bool, _>(column) {
        Ok(flag) => Ok(flag),
        Err(sqlx::Error::ColumnDecode { .. }) => Ok(row.try_get::<i64, _>(column)? != 0),
        Err(e) => Err(e),
    }
}

impl User {
    pub fn serialize(&self) -> UserView {
        UserView {
            id: self.id,
            email: self.email.clone(),
            password: self.password.clone(),
            is_active: self.is_active,
        }
    }
}

impl Table for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, email, password, is_active";
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>, is_active: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            is_active,
        }
    }
}

impl NewRow for NewUser {
    type Row = User;
    const INSERT_COLUMNS: &'static [&'static str] = &["email", "password", "is_active"];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, User, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, User, AnyArguments<'q>> {
        query.bind(self.email).bind(self.password).bind(self.is_active)
    }
}
