//! Table definitions, one dialect per backend.
//!
//! Foreign keys carry no cascade rules. PostgreSQL rejects removing a user,
//! character or planet that a favorite still points at. The SQLite fallback
//! runs with foreign key enforcement off, so there the delete succeeds and the
//! favorite is left orphaned.
//!
//! SQLite has no boolean storage class; `users.is_active` is declared
//! `INTEGER` so the `Any` driver decodes it as a plain integer.

use crate::database::manager::Backend;

const POSTGRES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(160) NOT NULL UNIQUE,
        password VARCHAR(90) NOT NULL,
        is_active BOOLEAN NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS characters (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS planets (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(120) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS character_favorites (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users (id),
        character_id BIGINT NOT NULL REFERENCES characters (id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS planet_favorites (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL REFERENCES users (id),
        planet_id BIGINT NOT NULL REFERENCES planets (id)
    )"#,
];

const SQLITE: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email VARCHAR(160) NOT NULL UNIQUE,
        password VARCHAR(90) NOT NULL,
        is_active INTEGER NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS characters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(120) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(120) NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS character_favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        character_id INTEGER NOT NULL REFERENCES characters (id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS planet_favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        planet_id INTEGER NOT NULL REFERENCES planets (id)
    )"#,
];

/// Statements are ordered so referenced tables exist before their referrers.
pub fn create_statements(backend: Backend) -> &'static [&'static str] {
    match backend {
        Backend::Postgres => POSTGRES,
        Backend::Sqlite => SQLITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_dialects_define_every_table_in_dependency_order() {
        for backend in [Backend::Postgres, Backend::Sqlite] {
            let tables: Vec<&str> = create_statements(backend)
                .iter()
                .map(|s| s.split_whitespace().nth(5).unwrap_or_default())
                .collect();
            assert_eq!(
                tables,
                ["users", "characters", "planets", "character_favorites", "planet_favorites"]
            );
        }
    }

    #[test]
    fn sqlite_flags_are_declared_as_integers() {
        let users = create_statements(Backend::Sqlite)[0];
        assert!(users.contains("is_active INTEGER NOT NULL"));
        assert!(!create_statements(Backend::Sqlite).iter().any(|s| s.contains("BOOLEAN")));
    }
}
