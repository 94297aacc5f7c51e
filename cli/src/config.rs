//! Configuration for cmdack.
//!
//! Values are layered: built-in defaults, then any `config.*` file found in
//! the config directory, then `CMDACK_*` environment variables. Command-line
//! flags are applied on top by the caller.
//!
//! Status descriptions can be replaced per numeric code through a `messages`
//! table, for example in `config.ini`:
//!
//! ```ini
//! [messages]
//! -4 = Command refused
//! ```

use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use cmdack_host::StatusCode;
use config::{ConfigError, Environment, File, FileFormat};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::cli::OutputFormat;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_ENV: String = format!("{}_DATA", PROJECT_NAME.clone());
    pub static ref CONFIG_ENV: String = format!("{}_CONFIG", PROJECT_NAME.clone());
}

const DEFAULT_CAPACITY: i64 = 1024;

const CONFIG_FILES: [(&str, FileFormat); 5] = [
    ("config.json5", FileFormat::Json5),
    ("config.json", FileFormat::Json),
    ("config.yaml", FileFormat::Yaml),
    ("config.toml", FileFormat::Toml),
    ("config.ini", FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Response buffer size in bytes.
    pub capacity: usize,
    pub format: OutputFormat,
    #[serde(default)]
    pub messages: Messages,
}

/// Status descriptions keyed by numeric code, overriding the built-in ones.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Messages(HashMap<String, String>);

impl Messages {
    pub fn describe(&self, status: StatusCode) -> &str {
        self.0
            .get(&status.code().to_string())
            .map(String::as_str)
            .unwrap_or(status.description())
    }
}

#[cfg(test)]
impl<const N: usize> From<[(&str, &str); N]> for Messages {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(code, text)| (code.to_owned(), text.to_owned()))
                .collect(),
        )
    }
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&get_config_dir())
    }

    fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("capacity", DEFAULT_CAPACITY)?
            .set_default("format", OutputFormat::default().to_string())?;

        for (file, format) in CONFIG_FILES {
            let source = File::from(config_dir.join(file))
                .format(format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder
            .add_source(Environment::with_prefix(PROJECT_NAME.as_str()).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

/// Return the directory used for local data (logs).
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_ENV.as_str()) {
        return PathBuf::from(dir);
    }
    project_directory()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(default_data_dir)
}

/// Return the directory searched for `config.*` files.
pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CONFIG_ENV.as_str()) {
        return PathBuf::from(dir);
    }
    project_directory()
        .map(|dirs| dirs.config_local_dir().to_path_buf())
        .unwrap_or_else(default_config_dir)
}

fn project_directory() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "SimonGorbot", env!("CARGO_PKG_NAME"))
}

fn default_data_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".data")
}

fn default_config_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".config")
}
