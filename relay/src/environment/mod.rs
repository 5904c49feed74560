use std::sync::Arc;

use relay_api_rest::RestServerConfig;
use relay_config::Config;
use relay_core_contact_impl::ContactServiceConfig;
use relay_di::provider;
use relay_extern_impl::telegram::TelegramApiServiceConfig;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        telegram_api_service_config: TelegramApiServiceConfig,

        // Core
        contact_service_config: ContactServiceConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.address,
        };

        // Extern
        let telegram_api_service_config = TelegramApiServiceConfig::new(
            config.telegram.bot_token.clone(),
            config.telegram.timeout.into(),
            config.telegram.api_endpoint_override.clone(),
        )?;

        // Core
        let contact_service_config = ContactServiceConfig {
            chat_id: Arc::new(config.telegram.chat_id.clone()),
        };

        Ok(Self {
            _cache: Default::default(),
            rest_server_config,
            telegram_api_service_config,
            contact_service_config,
        })
    }
}
