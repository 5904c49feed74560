use std::{net::SocketAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use relay_models::telegram::{TelegramBotToken, TelegramChatId};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variables that override individual config keys.
pub const ENVIRONMENT_OVERRIDES: &[(&str, &str)] = &[
    ("TELEGRAM_BOT_TOKEN", "telegram.bot_token"),
    ("TELEGRAM_CHAT_ID", "telegram.chat_id"),
];

/// Load the config from the files listed in `RELAY_CONFIG` (separated by
/// `:`, defaults to `config.toml`) and apply [`ENVIRONMENT_OVERRIDES`].
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var("RELAY_CONFIG");
    let paths = paths
        .as_deref()
        .unwrap_or("config.toml")
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();

    let overrides = ENVIRONMENT_OVERRIDES
        .iter()
        .filter_map(|&(var, key)| std::env::var(var).ok().map(|value| (key, value)))
        .collect::<Vec<_>>();
    let overrides = overrides
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect::<Vec<_>>();

    load_with_overrides(&paths, &overrides)
}

pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[(&str, &str)],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .try_fold(builder, |builder, &(key, value)| {
            builder
                .set_override(key, value)
                .with_context(|| format!("Failed to override config key {key}"))
        })?
        .build()?
        .try_deserialize()
        .context(
            "Failed to load config (TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID must be set and \
             non-empty)",
        )
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub telegram: TelegramConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: TelegramBotToken,
    pub chat_id: TelegramChatId,
    pub timeout: Duration,
    pub api_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}
