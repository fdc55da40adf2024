//! Bookmarker client: HTTP collaborators and the service worker thread.
mod classify;
mod save;
mod service;
mod settings;
mod types;

pub use classify::{Classifier, HttpClassifier};
pub use save::{HttpRecorder, Recorder};
pub use service::ServiceHandle;
pub use settings::ServiceSettings;
pub use types::{
    FailureKind, Prediction, RequestId, SaveAck, SaveRequest, ServiceError, ServiceEvent,
};
