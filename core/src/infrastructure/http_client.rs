use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for sidecar services; every request is bounded by `timeout`.
pub fn client_with_timeout(timeout: Duration) -> Result<Client, anyhow::Error> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
        .build()
        .context("failed to build HTTP client")
}
