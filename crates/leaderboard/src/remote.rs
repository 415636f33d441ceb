//! Remote JSON bin client.
//!
//! | Call | Request | Body |
//! |------|---------|------|
//! | fetch | `GET {base}/b/{bin}/latest` | response `{"record": {"scores": [...]}}` |
//! | store | `PUT {base}/b/{bin}` | request `{"scores": [...]}` |
//!
//! Both send the API key (if any) in `X-Master-Key`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RemoteConfig;
use crate::entry::LeaderboardEntry;
use crate::error::{LeaderboardError, Result};

pub const API_KEY_HEADER: &str = "X-Master-Key";

#[derive(Debug, Default, Deserialize)]
struct BinResponse {
    #[serde(default)]
    record: Option<BinRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct BinRecord {
    #[serde(default)]
    scores: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize)]
struct BinUpdate<'a> {
    scores: &'a [LeaderboardEntry],
}

#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn bin_url(&self) -> String {
        format!(
            "{}/b/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bin_id
        )
    }

    fn with_key(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        }
    }

    /// Current remote scores; a record without `scores` reads as empty.
    pub async fn fetch(&self) -> Result<Vec<LeaderboardEntry>> {
        let url = format!("{}/latest", self.bin_url());
        let resp = self.with_key(self.client.get(&url)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LeaderboardError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        let body: BinResponse = serde_json::from_slice(&bytes)?;
        Ok(body.record.unwrap_or_default().scores)
    }

    /// Replace the remote score list.
    pub async fn store(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        let resp = self
            .with_key(self.client.put(self.bin_url()))
            .json(&BinUpdate { scores: entries })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LeaderboardError::Status(status.as_u16()));
        }
        Ok(())
    }
}
