use std::{ops::Deref, sync::LazyLock, time::Duration};

use relay_utils::relay_version;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = relay_version();

    format!("Contact Relay ({repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Failed to build configured http client, using default: {err}");
                reqwest::Client::new()
            });
        Self(client)
    }
}
