use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the full router. Methods not listed for a path answer 405.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root::index))
        .route("/health", get(handlers::root::health))
        .merge(user_routes())
        .merge(catalog_routes())
        .merge(favorite_routes())
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:id",
            get(users::show).put(users::replace).delete(users::delete),
        )
        .route("/users/:id/favorites", get(handlers::favorites::list))
}

fn catalog_routes() -> Router<AppState> {
    use handlers::{characters, planets};

    Router::new()
        .route("/characters", get(characters::list))
        .route("/characters/:id", get(characters::show))
        .route("/planets", get(planets::list))
        .route("/planets/:id", get(planets::show))
}

fn favorite_routes() -> Router<AppState> {
    use handlers::favorites;

    Router::new()
        .route("/favorites/:id/planet", post(favorites::add_planet))
        .route("/favorites/:id/character", post(favorites::add_character))
        .route("/favorites/:id/planet/:planet_id", delete(favorites::remove_planet))
        .route(
            "/favorites/:id/character/:character_id",
            delete(favorites::remove_character),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::database::Database;

    async fn test_app() -> Router {
        let config = AppConfig::for_database("sqlite::memory:");
        let db = Database::connect(&config.database).await.unwrap();
        db.init().await.unwrap();
        app(AppState::new(db), &config)
    }

    async fn status_of(method: Method, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        test_app().await.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn unsupported_methods_are_rejected_with_405() {
        assert_eq!(status_of(Method::PATCH, "/users").await, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(status_of(Method::PATCH, "/users/1").await, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(status_of(Method::POST, "/planets").await, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(status_of(Method::GET, "/favorites/1/planet").await, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_paths_are_404() {
        assert_eq!(status_of(Method::GET, "/starships").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_and_health_answer_ok() {
        assert_eq!(status_of(Method::GET, "/").await, StatusCode::OK);
        assert_eq!(status_of(Method::GET, "/health").await, StatusCode::OK);
    }
}
