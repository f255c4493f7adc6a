//! Process configuration, read from flags or the environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Which entity store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// MongoDB at `--mongo-uri`.
    Mongo,
    /// In-process store; contents are lost on exit.
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "HTTP service for todo items", long_about = None)]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// MongoDB connection string.
    #[arg(long, env = "MONGO_URI", default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    /// Database holding the `todos` collection.
    #[arg(long, env = "MONGO_DB", default_value = "todo")]
    pub database: String,

    #[arg(long, env = "TODO_STORE", value_enum, default_value = "mongo")]
    pub store: StoreKind,

    /// How long to wait for a reachable MongoDB server at startup.
    #[arg(long, env = "MONGO_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "todo-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--store",
            "memory",
            "--connect-timeout-secs",
            "2",
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn rejects_unknown_store_kind() {
        let result = Config::try_parse_from(["todo-server", "--store", "postgres"]);
        assert!(result.is_err());
    }
}
