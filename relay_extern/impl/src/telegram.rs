use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, bail, Context};
use relay_di::Build;
use relay_extern_contracts::telegram::TelegramApiService;
use relay_models::telegram::{TelegramBotToken, TelegramChatId};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

use crate::http::HttpClient;

/// https://core.telegram.org/bots/api#making-requests
const API_ENDPOINT: &str = "https://api.telegram.org/";

#[derive(Debug, Clone, Build)]
pub struct TelegramApiServiceImpl {
    config: TelegramApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct TelegramApiServiceConfig {
    api_endpoint: Arc<Url>,
    bot_token: Arc<TelegramBotToken>,
    timeout: Duration,
}

impl TelegramApiServiceConfig {
    pub fn new(
        bot_token: TelegramBotToken,
        timeout: Duration,
        api_endpoint_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        let api_endpoint = match api_endpoint_override {
            Some(url) => url,
            None => API_ENDPOINT
                .parse()
                .context("Failed to parse telegram api endpoint")?,
        };
        if api_endpoint.cannot_be_a_base() {
            bail!("Telegram api endpoint {api_endpoint} cannot be used as a base url");
        }

        Ok(Self {
            api_endpoint: api_endpoint.into(),
            bot_token: bot_token.into(),
            timeout,
        })
    }

    /// `{api_endpoint}/bot{token}/{method}`
    fn method_url(&self, method: &str) -> anyhow::Result<Url> {
        let mut url = (*self.api_endpoint).clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Telegram api endpoint cannot be used as a base url"))?
            .pop_if_empty()
            .push(&format!("bot{}", **self.bot_token))
            .push(method);
        Ok(url)
    }
}

impl TelegramApiService for TelegramApiServiceImpl {
    async fn send_message(&self, chat_id: &TelegramChatId, text: &str) -> anyhow::Result<()> {
        let url = self.config.method_url("sendMessage")?;

        trace!(%chat_id, len = text.len(), "sending telegram message");

        let response = self
            .http
            .post(url)
            .timeout(self.config.timeout)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    anyhow!(
                        "Telegram sendMessage request timed out after {:?}",
                        self.config.timeout
                    )
                } else {
                    // the url contains the bot token
                    anyhow::Error::new(err.without_url())
                        .context("Failed to send telegram sendMessage request")
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let description = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|x| x.description);
            match description {
                Some(description) => {
                    bail!("Telegram sendMessage request failed with status {status}: {description}")
                }
                None => bail!("Telegram sendMessage request failed with status {status}"),
            }
        }

        debug!(%chat_id, "telegram message sent");

        Ok(())
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a TelegramChatId,
    text: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    description: Option<String>,
}
