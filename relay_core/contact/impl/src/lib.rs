use std::sync::Arc;

use relay_core_contact_contracts::{ContactSendMessageError, ContactService};
use relay_di::Build;
use relay_extern_contracts::telegram::TelegramApiService;
use relay_models::{contact::ContactMessage, telegram::TelegramChatId};
use tracing::error;

#[derive(Debug, Clone, Build)]
pub struct ContactServiceImpl<Telegram> {
    telegram: Telegram,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub chat_id: Arc<TelegramChatId>,
}

impl<Telegram> ContactService for ContactServiceImpl<Telegram>
where
    Telegram: TelegramApiService,
{
    async fn send_message(&self, message: ContactMessage) -> Result<(), ContactSendMessageError> {
        let text = format_notification(&message);

        self.telegram
            .send_message(&self.config.chat_id, &text)
            .await
            .map_err(|err| {
                error!(chat_id = %self.config.chat_id, "Failed to forward contact message: {err:#}");
                ContactSendMessageError::Send
            })
    }
}

fn format_notification(message: &ContactMessage) -> String {
    let mut text = format!(
        "📩 New Contact Form Submission\n\n👤 Name: {}\n📧 Email: {}\n",
        *message.author.name, *message.author.email
    );
    if let Some(subject) = &message.subject {
        text.push_str(&format!("📝 Subject: {}\n", **subject));
    }
    text.push_str(&format!("💬 Message:\n{}", *message.content));
    text
}
