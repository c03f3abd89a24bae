use std::{
    net::{AddrParseError, SocketAddr},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "sqlpractice",
    about = "SQL Practice - beginner SQL playground on a seeded SQLite database"
)]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "sqlpractice.toml")]
    pub config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// SQLite database file (overrides config file)
    #[arg(short, long)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the web UI (default)
    Serve,
    /// Run one read query and print the result table
    Query {
        sql: String,
    },
    /// Wipe the database and reload the sample data
    Reset,
    /// Print column names and types of the practice tables
    Schema,
    /// List the example queries
    Examples,
    /// List the practice exercises
    Exercises,
}

impl Command {
    /// Static listings print without opening or creating the database.
    pub fn uses_store(&self) -> bool {
        !matches!(self, Command::Examples | Command::Exercises)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default = "default_store")]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        json: false,
    }
}

fn default_store() -> StoreConfig {
    StoreConfig {
        path: default_store_path(),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("learn_sql.db")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: default_server(),
            logging: default_logging(),
            store: default_store(),
        }
    }
}

impl Config {
    pub fn load(cli: &CliArgs) -> Self {
        let mut config = match std::fs::read_to_string(&cli.config) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse config file: {}", e);
                Config::default()
            }),
            Err(_) => Config::default(),
        };

        // CLI overrides
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(ref level) = cli.log_level {
            config.logging.level = level.clone();
        }
        if let Some(ref db) = cli.db {
            config.store.path = db.clone();
        }

        config
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("sqlpractice").chain(args.iter().copied()))
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[store]\npath = \"/tmp/practice.db\"\n").unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/practice.db"));
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_cli_overrides_file() {
        let args = cli(&[
            "--config",
            "/definitely/missing.toml",
            "--port",
            "9000",
            "--db",
            "other.db",
            "query",
            "SELECT 1",
        ]);
        let config = Config::load(&args);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.store.path, PathBuf::from("other.db"));
        assert_eq!(
            args.command,
            Some(Command::Query {
                sql: "SELECT 1".to_string()
            })
        );
    }

    #[test]
    fn test_only_store_commands_use_the_store() {
        assert!(Command::Serve.uses_store());
        assert!(Command::Reset.uses_store());
        assert!(Command::Schema.uses_store());
        assert!(Command::Query {
            sql: "SELECT 1".to_string()
        }
        .uses_store());
        assert!(!Command::Examples.uses_store());
        assert!(!Command::Exercises.uses_store());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8501");

        let mut bad = Config::default();
        bad.server.host = "not a host".to_string();
        assert!(bad.listen_addr().is_err());
    }
}
