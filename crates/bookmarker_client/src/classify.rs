use popup_logging::popup_debug;

use crate::types::{map_reqwest_error, PredictRequest, PredictResponse};
use crate::{FailureKind, Prediction, ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, url: &str) -> Result<Prediction, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpClassifier {
    settings: ServiceSettings,
}

impl HttpClassifier {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, url: &str) -> Result<Prediction, ServiceError> {
        reqwest::Url::parse(url)
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let endpoint = self.settings.predict_url();
        popup_debug!("POST {} url={}", endpoint, url);
        let client = self.settings.build_client()?;

        let response = client
            .post(&endpoint)
            .json(&PredictRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The status gate comes before the body: error bodies on this
        // endpoint carry nothing worth surfacing.
        let status = response.status();
        popup_debug!("predict responded {}", status);
        if !status.is_success() {
            return Err(ServiceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::new(FailureKind::MalformedBody, err.to_string()))?;

        if body.status.as_deref() != Some("success") {
            return Err(ServiceError::new(
                FailureKind::NotSuccess {
                    status: body.status.unwrap_or_default(),
                },
                "classification did not succeed",
            ));
        }

        Ok(body.into_prediction())
    }
}
