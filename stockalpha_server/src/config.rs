//! Process configuration. The provider token is the only secret; the port
//! is the only other knob.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API token, handed to every client the factory builds.
    pub api_token: String,
    /// TCP port to serve on. Defaults to 3000.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("API_KEY").context("API_KEY must be set")?;
        let port = match env::var("PORT") {
            Ok(value) => value.parse().context("PORT must be a valid number")?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { api_token, port })
    }
}
