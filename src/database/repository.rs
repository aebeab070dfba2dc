use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::QueryAs;
use sqlx::{Any, AnyPool, FromRow};

use crate::database::manager::DatabaseError;

/// A persisted entity backed by one table with an integer `id` primary key.
pub trait Table: for<'r> FromRow<'r, AnyRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Column list selected and returned for this entity, `id` first
    const COLUMNS: &'static str;
}

/// Join rows keyed by `user_id`.
pub trait Favorite: Table {}

/// Insert payload for a [`Table`], without the store-assigned `id`.
pub trait NewRow: Send {
    type Row: Table;
    const INSERT_COLUMNS: &'static [&'static str];

    fn bind_values<'q>(
        self,
        query: QueryAs<'q, Any, Self::Row, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, Self::Row, AnyArguments<'q>>;
}

pub struct Repository<T> {
    pool: AnyPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Table> Repository<T> {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", T::COLUMNS, T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert one row and return it with its assigned id
    pub async fn insert<N>(&self, new_row: N) -> Result<T, DatabaseError>
    where
        N: NewRow<Row = T>,
    {
        let sql = insert_sql::<N>();
        let row = new_row
            .bind_values(sqlx::query_as::<_, T>(&sql))
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns whether a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<T: Favorite> Repository<T> {
    /// Delete the lowest-id row belonging to `user_id`, whatever it points at.
    pub async fn delete_first_for_user(&self, user_id: i64) -> Result<bool, DatabaseError> {
        let sql = format!(
            "DELETE FROM {table} WHERE id = (SELECT id FROM {table} WHERE user_id = $1 ORDER BY id LIMIT 1)",
            table = T::TABLE
        );
        let result = sqlx::query(&sql).bind(user_id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

fn insert_sql<N: NewRow>() -> String {
    let placeholders: Vec<String> = (1..=N::INSERT_COLUMNS.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        <N::Row as Table>::TABLE,
        N::INSERT_COLUMNS.join(", "),
        placeholders.join(", "),
        <N::Row as Table>::COLUMNS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::models::{NewPlanet, NewPlanetFavorite, NewUser};
    use crate::database::Database;

    async fn memory_db() -> Database {
        let config = AppConfig::for_database("sqlite::memory:");
        let db = Database::connect(&config.database).await.unwrap();
        db.init().await.unwrap();
        db
    }

    #[test]
    fn builds_insert_statement_with_numbered_placeholders() {
        assert_eq!(
            insert_sql::<NewUser>(),
            "INSERT INTO users (email, password, is_active) VALUES ($1, $2, $3) RETURNING id, email, password, is_active"
        );
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_get_by_id_reads_back() {
        let db = memory_db().await;
        let users = db.users();

        let first = users.insert(NewUser::new("leia@alderaan.org", "hope", true)).await.unwrap();
        let second = users.insert(NewUser::new("han@falcon.net", "kessel", false)).await.unwrap();
        assert!(second.id > first.id);

        let fetched = users.get_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "han@falcon.net");
        assert!(!fetched.is_active);
        assert!(users.get_by_id(first.id).await.unwrap().unwrap().is_active);
        assert!(users.get_by_id(second.id + 100).await.unwrap().is_none());

        let flags: Vec<bool> = users.list_all().await.unwrap().iter().map(|u| u.is_active).collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let db = memory_db().await;
        let users = db.users();
        users.insert(NewUser::new("luke@tatooine.net", "x", true)).await.unwrap();

        let err = users.insert(NewUser::new("luke@tatooine.net", "y", true)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Constraint(_)), "unexpected error: {err:?}");
        assert_eq!(users.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let db = memory_db().await;
        let planet = db.planets().insert(NewPlanet::new("Hoth")).await.unwrap();

        assert!(db.planets().delete(planet.id).await.unwrap());
        assert!(!db.planets().delete(planet.id).await.unwrap());
    }

    #[tokio::test]
    async fn deleting_a_referenced_user_leaves_the_favorite_orphaned() {
        let db = memory_db().await;
        let user = db.users().insert(NewUser::new("ben@stewjon.org", "kenobi", true)).await.unwrap();
        let tatooine = db.planets().insert(NewPlanet::new("Tatooine")).await.unwrap();
        let favorite = db
            .planet_favorites()
            .insert(NewPlanetFavorite::new(user.id, tatooine.id))
            .await
            .unwrap();

        assert!(db.users().delete(user.id).await.unwrap());
        let orphan = db.planet_favorites().get_by_id(favorite.id).await.unwrap().unwrap();
        assert_eq!(orphan.user_id, user.id);

        // Nothing checks the referenced ids on insert either
        let dangling = db.planet_favorites().insert(NewPlanetFavorite::new(777, 9999)).await.unwrap();
        assert_eq!(dangling.planet_id, 9999);
    }

    #[tokio::test]
    async fn delete_first_for_user_removes_lowest_id_only() {
        let db = memory_db().await;
        let user = db.users().insert(NewUser::new("rey@jakku.org", "bb8", true)).await.unwrap();
        let jakku = db.planets().insert(NewPlanet::new("Jakku")).await.unwrap();
        let ahch_to = db.planets().insert(NewPlanet::new("Ahch-To")).await.unwrap();

        let favorites = db.planet_favorites();
        let first = favorites.insert(NewPlanetFavorite::new(user.id, jakku.id)).await.unwrap();
        let second = favorites.insert(NewPlanetFavorite::new(user.id, ahch_to.id)).await.unwrap();

        assert!(favorites.delete_first_for_user(user.id).await.unwrap());
        let remaining = favorites.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
        assert_ne!(remaining[0].id, first.id);

        assert!(favorites.delete_first_for_user(user.id).await.unwrap());
        assert!(!favorites.delete_first_for_user(user.id).await.unwrap());
    }
}
