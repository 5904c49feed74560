use std::fmt;

use nutype::nutype;

/// Authentication token of a Telegram bot, as issued by `@BotFather`.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Clone, PartialEq, Eq, TryFrom, Deref, Deserialize)
)]
pub struct TelegramBotToken(String);

impl fmt::Debug for TelegramBotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TelegramBotToken([redacted])")
    }
}

/// Unique identifier of the target chat, or the username of the target
/// channel in the format `@channelusername`.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct TelegramChatId(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_token_is_redacted() {
        let token = TelegramBotToken::try_new("123456:secret-token").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-token"));
        assert_eq!(&**token, "123456:secret-token");
    }

    #[test]
    fn blank_values_are_rejected() {
        assert!(TelegramBotToken::try_new("   ").is_err());
        assert!(TelegramChatId::try_new("").is_err());
    }

    #[test]
    fn chat_id_deserialize() {
        let chat_id = serde_json::from_str::<TelegramChatId>(r#"" -100123 ""#).unwrap();
        assert_eq!(chat_id.to_string(), "-100123");
        assert!(serde_json::from_str::<TelegramChatId>(r#""""#).is_err());
    }
}
