//! e621 API client.

use reqwest::{Client, StatusCode};

use crate::api::types::{E621Post, E621PostResponse};
use crate::config::Config;
use crate::error::{Error, Result};

/// API base URL. e926 is a filtered mirror of the same post namespace,
/// so ids scanned from either domain resolve here.
const API_BASE: &str = "https://e621.net";

/// Client for the e621 JSON API.
pub struct E621Client {
    client: Client,
}

impl E621Client {
    /// Create a new client.
    ///
    /// Site etiquette requires the User-Agent to name the client and
    /// the operating user.
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = format!(
            "{}/{} (by {})",
            config.client_name, config.client_version, config.e6.username
        );

        let client = Client::builder()
            .user_agent(&user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch a single post by id.
    pub async fn get_post(&self, post_id: u64) -> Result<E621Post> {
        let url = format!("{}/posts/{}.json", API_BASE, post_id);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::Api(format!("post {} does not exist", post_id)));
        }
        if !status.is_success() {
            return Err(Error::Api(format!("post {}: HTTP {}", post_id, status)));
        }

        let text = response.text().await?;
        let parsed: E621PostResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Api(format!("Failed to parse post {}: {}", post_id, e)))?;

        Ok(parsed.post)
    }
}
