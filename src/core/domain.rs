use std::fmt;
use std::net::SocketAddr;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// ServeMode selects how the catalog router is hosted
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ServeMode {
    Http,
    Lambda,
}

impl FromStr for ServeMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(ServeMode::Http),
            "lambda" => Ok(ServeMode::Lambda),
            _ => Err(LibraryError::validation(
                format!("unknown serve mode {}", s).as_str(), Some("CATALOG_SERVE_MODE".to_string()))),
        }
    }
}

impl Display for ServeMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ServeMode::Http => write!(f, "http"),
            ServeMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub database_url: String,
    pub table_name: String,
    pub serve_mode: ServeMode,
    pub bind_addr: String,
    pub reset_and_seed: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::Sqlite,
            database_url: "sqlite://books.db".to_string(),
            table_name: "books".to_string(),
            serve_mode: ServeMode::Http,
            bind_addr: "127.0.0.1:3000".to_string(),
            reset_and_seed: false,
            log_level: "info".to_string(),
        }
    }

    pub fn in_memory(branch_id: &str) -> Self {
        Configuration {
            database_url: "sqlite::memory:".to_string(),
            ..Configuration::new(branch_id)
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds the configuration from CATALOG_* variables, falling back to the
    // defaults of `Configuration::new` for anything unset.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self> where F: Fn(&str) -> Option<String> {
        let branch = lookup("CATALOG_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(store) = lookup("CATALOG_STORE") {
            config.store = store.parse()?;
        }
        if let Some(url) = lookup("CATALOG_DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(table) = lookup("CATALOG_TABLE") {
            if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
                return Err(LibraryError::validation(
                    format!("invalid table name {:?}", table).as_str(), Some("CATALOG_TABLE".to_string())));
            }
            config.table_name = table;
        }
        if let Some(mode) = lookup("CATALOG_SERVE_MODE") {
            config.serve_mode = mode.parse()?;
        }
        if let Some(addr) = lookup("CATALOG_BIND_ADDR") {
            if addr.parse::<SocketAddr>().is_err() {
                return Err(LibraryError::validation(
                    format!("invalid bind address {}", addr).as_str(), Some("CATALOG_BIND_ADDR".to_string())));
            }
            config.bind_addr = addr;
        }
        if let Some(seed) = lookup("CATALOG_RESET_AND_SEED") {
            config.reset_and_seed = parse_flag("CATALOG_RESET_AND_SEED", seed.as_str())?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            config.log_level = level;
        }
        Ok(config)
    }
}

fn parse_flag(name: &str, value: &str) -> LibraryResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(LibraryError::validation(
            format!("invalid boolean {} for {}", value, name).as_str(), Some(name.to_string()))),
    }
}
