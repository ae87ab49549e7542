// config.rs - Server configuration from the environment
//
// Values come from the process environment, optionally seeded from a
// `.env` file. Leptos' own settings (site address, reload port) are read
// separately by leptos_config from Cargo.toml.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::web_app::api::db::DEFAULT_SCHEMA;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Schema holding the customers and invoices tables
    pub schema: String,
    /// Fill an empty database with sample and random data at start-up
    pub seed_demo_data: bool,
}

impl ServerConfig {
    /// Loads `.env` (if any) and reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_url = vars
            .get("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .cloned()
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match vars.get("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: value.clone(),
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "DATABASE_MAX_CONNECTIONS",
                        value: value.clone(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        let schema = match vars.get("CRM_SCHEMA").map(|s| s.trim()) {
            None | Some("") => DEFAULT_SCHEMA.to_string(),
            Some(schema) if is_identifier(schema) => schema.to_string(),
            Some(schema) => {
                return Err(ConfigError::Invalid {
                    name: "CRM_SCHEMA",
                    value: schema.to_string(),
                    reason: "only lowercase letters, digits and '_' are allowed".to_string(),
                })
            }
        };

        let seed_demo_data = match vars.get("SEED_DEMO_DATA") {
            None => false,
            Some(value) => parse_flag("SEED_DEMO_DATA", value)?,
        };

        Ok(Self {
            database_url,
            max_connections,
            schema,
            seed_demo_data,
        })
    }
}

// The schema name is interpolated into SQL text
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
