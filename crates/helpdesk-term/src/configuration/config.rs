#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

/// Environment override for the backend base address.
pub const BACKEND_URL_ENV: &str = "HELPDESK_BACKEND_URL";

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BackendUrl,
    ConfigFile,
    UserId,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        "".to_string()
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("helpdesk/config.toml");

        match key {
            ConfigKey::BackendUrl => {
                env::var(BACKEND_URL_ENV).unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
            }
            ConfigKey::UserId => "web_user".to_string(),
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
        }
    }

    pub async fn load(matches: &ArgMatches) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        if let Some(arg_config_file) = matches.get_one::<String>(&ConfigKey::ConfigFile.to_string())
        {
            config_file = arg_config_file.to_string();
        }

        let config_path = std::path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::set(key, val_str);
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                if val.is_empty() {
                    continue;
                }
                Config::set(key, val)
            }
        }

        tracing::debug!(
            backend_url = Config::get(ConfigKey::BackendUrl),
            user_id = Config::get(ConfigKey::UserId),
            "config"
        );

        Ok(())
    }

    pub fn serialize_default(cmd: Command) -> String {
        ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| e.get_long().unwrap_or_default() == key.to_string())?;

                let description = arg
                    .get_help()
                    .map(|help| help.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_string();

                Some(format!("# {description}\n{key} = \"{}\"", Config::default(key)))
            })
            .collect::<Vec<String>>()
            .join("\n\n")
    }
}
