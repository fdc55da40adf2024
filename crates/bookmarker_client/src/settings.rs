use std::time::Duration;

use crate::{FailureKind, ServiceError};

/// Connection settings for the classification and persistence service.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// POST target for classification requests.
    pub fn predict_url(&self) -> String {
        self.endpoint("/predict")
    }

    /// POST target for save submissions.
    pub fn save_url(&self) -> String {
        self.endpoint("/save")
    }

    /// The service's browsing page, opened outside the popup.
    pub fn explore_url(&self) -> String {
        self.endpoint("/explore")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client, ServiceError> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))
    }
}
