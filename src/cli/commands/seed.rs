use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;
use crate::database::models::{NewCharacter, NewPlanet};
use crate::database::{Database, DatabaseError};

/// Fixture file layout: `{"characters": [name...], "planets": [name...]}`
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub characters: usize,
    pub planets: usize,
}

pub async fn run(config: AppConfig, file: PathBuf) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read fixture {}", file.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .with_context(|| format!("invalid fixture {}", file.display()))?;

    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    db.init().await.context("failed to create database schema")?;

    let loaded = load(&db, &fixture).await;
    db.close().await;
    let summary = loaded?;

    println!(
        "Seeded {} characters and {} planets from {}",
        summary.characters,
        summary.planets,
        file.display()
    );
    Ok(())
}

/// Insert every fixture entry as its own row; existing rows are left alone.
pub async fn load(db: &Database, fixture: &Fixture) -> Result<SeedSummary, DatabaseError> {
    let mut summary = SeedSummary::default();

    for name in &fixture.characters {
        db.characters().insert(NewCharacter::new(name.as_str())).await?;
        summary.characters += 1;
    }
    for name in &fixture.planets {
        db.planets().insert(NewPlanet::new(name.as_str())).await?;
        summary.planets += 1;
    }

    info!(characters = summary.characters, planets = summary.planets, "fixture loaded");
    Ok(summary)
}
