use anyhow::{Context, Result};

use crate::config::{
    config_model::{Database, DotEnvyConfig},
    stage::Stage,
};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let database = Database {
        url: std::env::var("DATABASE_URL").context("DATABASE_URL is invalid")?,
        max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS is invalid")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        },
    };

    Ok(DotEnvyConfig { database })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}
