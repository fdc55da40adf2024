use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::classify::{Classifier, HttpClassifier};
use crate::save::{HttpRecorder, Recorder};
use crate::{RequestId, SaveRequest, ServiceEvent, ServiceSettings};

enum ServiceCommand {
    Classify { request: RequestId, url: String },
    Save { request: RequestId, submission: SaveRequest },
}

/// Handle to the service worker thread. Commands go in over a channel; one
/// task per command runs on the thread's tokio runtime and its outcome comes
/// back as a [`ServiceEvent`] drained via [`ServiceHandle::try_recv`].
#[derive(Clone)]
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<ServiceCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ServiceEvent>>>,
}

impl ServiceHandle {
    pub fn new(settings: ServiceSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let classifier = Arc::new(HttpClassifier::new(settings.clone()));
        let recorder = Arc::new(HttpRecorder::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let classifier = classifier.clone();
                let recorder = recorder.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(classifier.as_ref(), recorder.as_ref(), command, event_tx)
                        .await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn classify(&self, request: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ServiceCommand::Classify {
            request,
            url: url.into(),
        });
    }

    pub fn save(&self, request: RequestId, submission: SaveRequest) {
        let _ = self
            .cmd_tx
            .send(ServiceCommand::Save { request, submission });
    }

    pub fn try_recv(&self) -> Option<ServiceEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    classifier: &dyn Classifier,
    recorder: &dyn Recorder,
    command: ServiceCommand,
    event_tx: mpsc::Sender<ServiceEvent>,
) {
    match command {
        ServiceCommand::Classify { request, url } => {
            let result = classifier.classify(&url).await;
            let _ = event_tx.send(ServiceEvent::AnalysisDone { request, result });
        }
        ServiceCommand::Save { request, submission } => {
            let result = recorder.save(&submission).await;
            let _ = event_tx.send(ServiceEvent::SaveDone { request, result });
        }
    }
}
