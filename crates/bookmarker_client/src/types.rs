use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Events flowing back from the service thread. Each carries the token of
/// the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    AnalysisDone {
        request: RequestId,
        result: Result<Prediction, ServiceError>,
    },
    SaveDone {
        request: RequestId,
        result: Result<SaveAck, ServiceError>,
    },
}

/// A successful classification as the service reported it. Missing fields
/// arrive empty; callers decide their own fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
    pub favicon_url: Option<String>,
}

/// The persistence verdict for one save submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAck {
    Saved,
    Duplicate,
    Rejected { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: FailureKind,
    pub message: String,
}

impl ServiceError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedBody,
    /// The service answered 2xx but did not mark the response successful.
    NotSuccess {
        status: String,
    },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed body"),
            FailureKind::NotSuccess { status } => write!(f, "service status {status:?}"),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    pub url: &'a str,
}

/// Classification response body. Everything but `status` is optional on the
/// wire; error bodies carry none of it.
#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    pub status: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub site_name: Option<String>,
    pub category: Option<String>,
    pub tags: Option<TagsField>,
    pub content: Option<String>,
    pub favicon_url: Option<String>,
}

impl PredictResponse {
    pub(crate) fn into_prediction(self) -> Prediction {
        Prediction {
            url: self.url.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            site_name: self.site_name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            tags: self.tags.map(TagsField::into_list).unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            favicon_url: self.favicon_url,
        }
    }
}

/// Tags arrive either as a JSON list or as one comma-joined string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TagsField {
    List(Vec<String>),
    Delimited(String),
}

impl TagsField {
    pub(crate) fn into_list(self) -> Vec<String> {
        match self {
            TagsField::List(tags) => tags,
            TagsField::Delimited(tags) => tags
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Save submission, one field per column the service persists. An unset
/// category is sent as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveRequest {
    pub url: String,
    pub title: String,
    pub site_name: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
    pub favicon_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}
