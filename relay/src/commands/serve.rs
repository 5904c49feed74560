use relay_config::Config;
use relay_di::Provide;
use tracing::info;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let server: RestServer = provider.provide();

    info!(
        chat_id = %config.telegram.chat_id,
        timeout = ?config.telegram.timeout.0,
        "Forwarding contact messages to telegram"
    );
    info!("Starting http server on {}", config.http.address);
    server.serve().await
}
