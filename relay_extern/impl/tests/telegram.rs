use std::{path::Path, time::Duration};

use relay_config::{TelegramConfig, DEFAULT_CONFIG_PATH};
use relay_di::{provider, Provide};
use relay_extern_contracts::telegram::TelegramApiService;
use relay_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use relay_models::telegram::TelegramChatId;
use relay_testing::telegram::{ReceivedMessage, TelegramTestServer};
use tokio::net::TcpListener;
use url::Url;

const BOT_TOKEN: &str = "123456:test-token";
const CHAT_ID: &str = "-1001234567890";

#[tokio::test]
async fn send_message() {
    let server = TelegramTestServer::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let (sut, chat_id) = make_sut(server.endpoint(), BOT_TOKEN, CHAT_ID, None);

    sut.send_message(&chat_id, "Hello World!").await.unwrap();

    assert_eq!(
        server.received().await,
        [ReceivedMessage {
            bot_token: BOT_TOKEN.into(),
            chat_id: CHAT_ID.into(),
            text: "Hello World!".into(),
        }]
    );
}

#[tokio::test]
async fn unauthorized() {
    let server = TelegramTestServer::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let (sut, chat_id) = make_sut(server.endpoint(), "654321:wrong-token", CHAT_ID, None);

    let err = sut.send_message(&chat_id, "Hello World!").await.unwrap_err();

    let err = format!("{err:#}");
    assert!(err.contains("401"), "{err}");
    assert!(err.contains("Unauthorized"), "{err}");
    assert!(!err.contains("wrong-token"), "{err}");
    assert_eq!(server.received().await.len(), 1);
}

#[tokio::test]
async fn chat_not_found() {
    let server = TelegramTestServer::spawn(BOT_TOKEN, CHAT_ID).await.unwrap();
    let (sut, chat_id) = make_sut(server.endpoint(), BOT_TOKEN, "@unknown", None);

    let err = sut.send_message(&chat_id, "Hello World!").await.unwrap_err();

    assert!(format!("{err:#}").contains("chat not found"));
}

#[tokio::test]
async fn connection_refused() {
    // bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{addr}/").parse().unwrap();
    let (sut, chat_id) = make_sut(endpoint, BOT_TOKEN, CHAT_ID, None);

    let err = sut.send_message(&chat_id, "Hello World!").await.unwrap_err();

    let err = format!("{err:#}");
    assert!(err.contains("Failed to send"), "{err}");
    assert!(!err.contains("test-token"), "{err}");
}

#[tokio::test]
async fn timeout() {
    // accepts connections (via the backlog) but never responds
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/", listener.local_addr().unwrap())
        .parse()
        .unwrap();
    let (sut, chat_id) = make_sut(
        endpoint,
        BOT_TOKEN,
        CHAT_ID,
        Some(Duration::from_millis(200)),
    );

    let err = sut.send_message(&chat_id, "Hello World!").await.unwrap_err();

    assert!(format!("{err:#}").contains("timed out"));
    drop(listener);
}

#[test]
fn default_config() {
    let config = relay_config::load_with_overrides(
        &[Path::new(DEFAULT_CONFIG_PATH)],
        &[
            ("telegram.bot_token", BOT_TOKEN),
            ("telegram.chat_id", CHAT_ID),
        ],
    )
    .unwrap();

    let TelegramConfig {
        bot_token,
        timeout,
        api_endpoint_override,
        ..
    } = config.telegram;

    TelegramApiServiceConfig::new(bot_token, timeout.into(), api_endpoint_override).unwrap();
}

fn make_sut(
    endpoint: Url,
    bot_token: &str,
    chat_id: &str,
    timeout: Option<Duration>,
) -> (TelegramApiServiceImpl, TelegramChatId) {
    provider! {
        Provider { telegram_api_service_config: TelegramApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        telegram_api_service_config: TelegramApiServiceConfig::new(
            bot_token.try_into().unwrap(),
            timeout.unwrap_or(Duration::from_secs(5)),
            Some(endpoint),
        )
        .unwrap(),
    };

    (provider.provide(), chat_id.try_into().unwrap())
}
