//! SWAPI client - the public Star Wars dataset

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::outbound::DatasetPort;
use crate::domain::value_objects::{Category, DataRecord, DataRecordError};

/// Client for the Star Wars API
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SwapiError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn record_url(&self, category: Category, id: u32) -> String {
        format!("{}/{}/{}/", self.base_url, category, id)
    }

    /// Fetch one entity, e.g. `GET /people/1/`
    pub async fn get_record(&self, category: Category, id: u32) -> Result<DataRecord, SwapiError> {
        let response = self.client.get(self.record_url(category, id)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(SwapiError::ApiError(format!("{}: {}", status, error_text)));
        }

        let value: serde_json::Value = response.json().await?;
        Ok(DataRecord::from_value(value)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] DataRecordError),
}

#[async_trait]
impl DatasetPort for SwapiClient {
    type Error = SwapiError;

    async fn fetch_record(&self, category: Category, id: u32) -> Result<DataRecord, Self::Error> {
        self.get_record(category, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_url() {
        let client = SwapiClient::new("https://swapi.dev/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.record_url(Category::Planets, 3),
            "https://swapi.dev/api/planets/3/"
        );
    }
}
