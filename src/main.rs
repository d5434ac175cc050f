//! application entry point

use crate::server::database::pool::Pool;
use crate::server::model::config::ServerConfig;
use crate::server::service::catalog::MenuCatalog;
use crate::server::state::AppState;
use anyhow::Context;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::Path;
use std::str::FromStr;

mod server;

const DOTENV_FILE: &str = ".env.dev";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_loaded = match env {
        Env::Prod | Env::Stg => true, // load in CI
        Env::Dev => dotenvy::from_path(Path::new(DOTENV_FILE)).is_ok(),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if !dotenv_loaded {
        warn!("no {} file loaded, using process env and defaults", DOTENV_FILE);
    }

    // c. storage and menu
    let config = ServerConfig::from_env().context("invalid server config")?;
    let pool = Pool::connect(&config.pool)
        .await
        .context("failed to create db connection pool")?;
    let catalog = MenuCatalog::fetch(&pool, config.db_timeout)
        .await
        .context("failed to load menu items")?;
    let state = AppState::new(pool, catalog, config.db_timeout);

    // d. run app
    info!("App is starting in env={} on {}", env, config.addr);
    server::run(config, state).await?;
    Ok(())
}

#[derive(Debug, Display, PartialEq)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env() {
        assert_eq!("prod".parse::<Env>(), Ok(Env::Prod));
        assert_eq!("stg".parse::<Env>(), Ok(Env::Stg));
        assert!("staging".parse::<Env>().is_err());
        assert_eq!(Env::Dev.to_string(), "Dev");
    }
}
