use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use url::Url;

const SEND_MESSAGE_ROUTE: &str = "/:bot/sendMessage";
const MAX_MESSAGE_LENGTH: usize = 4096;

/// A `sendMessage` request as received by the testing server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub bot_token: String,
    pub chat_id: String,
    pub text: String,
}

/// Testing server running in the background of the current tokio runtime.
#[derive(Debug, Clone)]
pub struct TelegramTestServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

#[derive(Debug)]
struct ServerState {
    bot_token: String,
    chat_id: String,
    received: Mutex<Vec<ReceivedMessage>>,
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    bot_token: String,
    chat_id: String,
) -> anyhow::Result<()> {
    info!("Starting telegram bot api testing server on {host}:{port}");
    info!("Telegram api endpoint: http://{host}:{port}/");
    info!("Bot token: {bot_token:?}");
    info!("Chat id: {chat_id:?}");
    info!(
        "Messages sent with a different bot token or to a different chat are rejected like the \
         real bot api would"
    );

    let state = ServerState::new(bot_token, chat_id);

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(state))
        .await
        .context("Failed to start HTTP server")
}

impl TelegramTestServer {
    /// Start a testing server on an ephemeral port on localhost.
    pub async fn spawn(
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let state = ServerState::new(bot_token.into(), chat_id.into());

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind to an ephemeral port")?;
        let addr = listener.local_addr()?;

        let router = router(Arc::clone(&state));
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                tracing::error!("telegram testing server failed: {err}");
            }
        });

        Ok(Self { addr, state })
    }

    /// Base url to use as the telegram api endpoint.
    pub fn endpoint(&self) -> Url {
        format!("http://{}/", self.addr).parse().unwrap()
    }

    /// All `sendMessage` requests received so far, including rejected ones.
    pub async fn received(&self) -> Vec<ReceivedMessage> {
        self.state.received.lock().await.clone()
    }
}

impl ServerState {
    fn new(bot_token: String, chat_id: String) -> Arc<Self> {
        Arc::new(Self {
            bot_token,
            chat_id,
            received: Default::default(),
        })
    }
}

fn router(state: Arc<ServerState>) -> Router<()> {
    Router::new()
        .route(SEND_MESSAGE_ROUTE, routing::post(send_message))
        .with_state(state)
}

#[derive(Deserialize)]
struct SendMessageRequest {
    chat_id: Value,
    text: String,
}

async fn send_message(
    state: State<Arc<ServerState>>,
    Path(bot): Path<String>,
    Json(SendMessageRequest { chat_id, text }): Json<SendMessageRequest>,
) -> Response {
    let bot_token = bot.strip_prefix("bot").unwrap_or_default().to_owned();
    let chat_id = match chat_id {
        Value::String(chat_id) => chat_id,
        other => other.to_string(),
    };

    let mut received = state.received.lock().await;
    received.push(ReceivedMessage {
        bot_token: bot_token.clone(),
        chat_id: chat_id.clone(),
        text: text.clone(),
    });
    let message_id = received.len();
    drop(received);

    if bot_token != state.bot_token {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if chat_id != state.chat_id {
        return error(StatusCode::BAD_REQUEST, "Bad Request: chat not found");
    }
    if text.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Bad Request: message text is empty");
    }
    if text.chars().count() > MAX_MESSAGE_LENGTH {
        return error(StatusCode::BAD_REQUEST, "Bad Request: message is too long");
    }

    Json(json!({
        "ok": true,
        "result": {
            "message_id": message_id,
            "chat": { "id": chat_id },
            "text": text,
        }
    }))
    .into_response()
}

fn error(status: StatusCode, description: &str) -> Response {
    let body = json!({
        "ok": false,
        "error_code": status.as_u16(),
        "description": description,
    });
    (status, Json(body)).into_response()
}
