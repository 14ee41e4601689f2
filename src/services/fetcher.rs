use reqwest::Client;

use crate::error::SnapshotError;

// Both source sites reject reqwest's default identifier.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub fn build_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("reqwest client with static configuration")
}

/// One GET, no retries. Non-2xx statuses and transport failures both come
/// back as [`SnapshotError::Network`]; the body is decoded with the
/// response's declared charset (UTF-8 for every target we fetch).
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, SnapshotError> {
    let network_err = |source| SnapshotError::Network {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(network_err)?
        .error_for_status()
        .map_err(network_err)?;

    response.text().await.map_err(network_err)
}
