use popup_logging::popup_debug;

use crate::types::{map_reqwest_error, SaveResponse};
use crate::{FailureKind, SaveAck, SaveRequest, ServiceError, ServiceSettings};

#[async_trait::async_trait]
pub trait Recorder: Send + Sync {
    async fn save(&self, submission: &SaveRequest) -> Result<SaveAck, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecorder {
    settings: ServiceSettings,
}

impl HttpRecorder {
    pub fn new(settings: ServiceSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Recorder for HttpRecorder {
    async fn save(&self, submission: &SaveRequest) -> Result<SaveAck, ServiceError> {
        let endpoint = self.settings.save_url();
        popup_debug!("POST {} url={}", endpoint, submission.url);
        let client = self.settings.build_client()?;

        let response = client
            .post(&endpoint)
            .json(submission)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Rejection bodies carry the reason the caller should surface, so
        // the body is parsed before the HTTP status is consulted.
        let status = response.status();
        popup_debug!("save responded {}", status);
        let text = response.text().await.map_err(map_reqwest_error)?;

        let body: SaveResponse = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(ServiceError::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    status.to_string(),
                ));
            }
            Err(err) => {
                return Err(ServiceError::new(FailureKind::MalformedBody, err.to_string()));
            }
        };

        match body.status.as_deref() {
            Some("success") => {
                if let Some(message) = body.message {
                    popup_debug!("save acknowledged: {}", message);
                }
                Ok(SaveAck::Saved)
            }
            Some("duplicate") => {
                if let Some(message) = body.message {
                    popup_debug!("duplicate submission: {}", message);
                }
                Ok(SaveAck::Duplicate)
            }
            _ => Ok(SaveAck::Rejected {
                message: body.error.or(body.message),
            }),
        }
    }
}
