use anyhow::Context;
use clap::Subcommand;
use relay_config::Config;
use relay_di::Provide;
use relay_extern_contracts::telegram::TelegramApiService;
use tracing::info;

use crate::environment::{types::TelegramApi, Provider};

#[derive(Debug, Subcommand)]
pub enum TelegramCommand {
    /// Test telegram deliverability by sending a message to the configured chat
    Test {
        /// The text of the message
        #[arg(long, default_value = "Telegram deliverability seems to be working!")]
        text: String,
    },
}

impl TelegramCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            TelegramCommand::Test { text } => test(config, text).await,
        }
    }
}

async fn test(config: Config, text: String) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let telegram: TelegramApi = provider.provide();

    telegram
        .send_message(&config.telegram.chat_id, &text)
        .await
        .context("Failed to send telegram message")?;

    info!(chat_id = %config.telegram.chat_id, "Test message sent");

    Ok(())
}
