use crate::transpiler::construction::{DEFAULT_CLASS, DEFAULT_PACKAGE, EmitOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "figdroid.toml";

/// Settings shared by every command. Resolved from defaults, then an
/// optional TOML file, then `FIGDROID_*` environment variables; command-line
/// flags are applied last by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub package_name: String,
    pub class_name: String,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub targets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS.to_string(),
            output_dir: PathBuf::from("./generated"),
            log_level: "info".to_string(),
            targets: vec!["xml".to_string(), "java".to_string(), "kotlin".to_string()],
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads `explicit` when given, else `figdroid.toml` from the working
    /// directory if present, then applies the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(package) = lookup("FIGDROID_PACKAGE") {
            self.package_name = package;
        }
        if let Some(class) = lookup("FIGDROID_CLASS") {
            self.class_name = class;
        }
        if let Some(dir) = lookup("FIGDROID_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("FIGDROID_LOG") {
            self.log_level = level;
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            package_name: self.package_name.clone(),
            class_name: self.class_name.clone(),
        }
    }
}
