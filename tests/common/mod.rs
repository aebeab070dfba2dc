#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use starwars_api::cli::commands::seed::{self, Fixture};
use starwars_api::{app, AppConfig, AppState, Database};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: Client,
    pub db: Database,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET and decode the body, asserting a 200
    pub async fn get_ok(&self, path: &str) -> Result<Value> {
        let res = self.client.get(self.url(path)).send().await?;
        expect_status(res, StatusCode::OK).await
    }

    pub async fn create_user(&self, email: &str, password: &str) -> Result<()> {
        let res = self
            .client
            .post(self.url("/users"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        expect_status(res, StatusCode::OK).await?;
        Ok(())
    }

    /// Id of the user with `email`, looked up through GET /users
    pub async fn user_id(&self, email: &str) -> Result<i64> {
        let body = self.get_ok("/users").await?;
        body["results"]
            .as_array()
            .context("results should be an array")?
            .iter()
            .find(|u| u["email"] == email)
            .and_then(|u| u["id"].as_i64())
            .with_context(|| format!("no user with email {}", email))
    }

    /// Loads a few characters and planets straight into the store
    pub async fn seed_catalog(&self) -> Result<()> {
        let fixture = Fixture {
            characters: vec!["Luke Skywalker".into(), "Darth Vader".into(), "Yoda".into()],
            planets: vec!["Tatooine".into(), "Hoth".into(), "Dagobah".into()],
        };
        seed::load(&self.db, &fixture).await?;
        Ok(())
    }
}

pub async fn expect_status(res: Response, expected: StatusCode) -> Result<Value> {
    let status = res.status();
    let body = res.json::<Value>().await?;
    anyhow::ensure!(status == expected, "expected {}, got {}: {}", expected, status, body);
    Ok(body)
}

/// Start a server on a free port backed by a fresh in-memory database
pub async fn spawn_server() -> Result<TestServer> {
    let config = AppConfig::for_database("sqlite::memory:");
    let db = Database::connect(&config.database).await?;
    db.init().await?;

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind {}", base_url))?;

    let router = app(AppState::new(db.clone()), &config);
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(TestServer {
        port,
        base_url,
        client: Client::new(),
        db,
    })
}
