use std::future::Future;

use relay_models::telegram::TelegramChatId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TelegramApiService: Send + Sync + 'static {
    /// Send a plain text message to the given chat.
    ///
    /// Fails if the request could not be sent, timed out or if the Bot API
    /// did not respond with `200 OK`.
    fn send_message(
        &self,
        chat_id: &TelegramChatId,
        text: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockTelegramApiService {
    pub fn with_send_message(mut self, chat_id: TelegramChatId, text: String, ok: bool) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(chat_id), mockall::predicate::eq(text))
            .return_once(move |_, _| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("Telegram responded with 400 Bad Request"))
                }))
            });
        self
    }
}
