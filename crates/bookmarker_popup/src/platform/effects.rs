use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bookmarker_client::{
    Prediction, SaveAck, SaveRequest, ServiceEvent, ServiceHandle, ServiceSettings,
};
use bookmarker_core::{
    AnalysisOutcome, Classification, Effect, Msg, SaveOutcome, SavePayload, TagSet,
};
use popup_logging::{popup_info, popup_warn};

use super::host::HostEnvironment;

/// Bridges core effects to service commands, and service events back to
/// core messages on `msg_tx`.
pub struct EffectRunner {
    service: ServiceHandle,
    explore_url: String,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let explore_url = settings.explore_url();
        let service = ServiceHandle::new(settings);
        let runner = Self {
            service,
            explore_url,
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>, host: &dyn HostEnvironment) {
        for effect in effects {
            match effect {
                Effect::RequestAnalysis { request, url } => {
                    popup_info!("RequestAnalysis request={} url={}", request, url);
                    self.service.classify(request, url);
                }
                Effect::RequestSave { request, payload } => {
                    popup_info!("RequestSave request={} url={}", request, payload.url);
                    self.service.save(request, map_payload(payload));
                }
                Effect::OpenExplore => {
                    host.open_external(&self.explore_url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let service = self.service.clone();
        thread::spawn(move || loop {
            if let Some(event) = service.try_recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

// Failure detail stays in the log; the core only sees the collapsed outcome.
fn map_event(event: ServiceEvent) -> Msg {
    match event {
        ServiceEvent::AnalysisDone { request, result } => Msg::AnalysisCompleted {
            request,
            outcome: match result {
                Ok(prediction) => AnalysisOutcome::Success(map_prediction(prediction)),
                Err(err) => {
                    popup_warn!("analysis request {} failed: {}", request, err);
                    AnalysisOutcome::Failed
                }
            },
        },
        ServiceEvent::SaveDone { request, result } => Msg::SaveCompleted {
            request,
            outcome: match result {
                Ok(SaveAck::Saved) => SaveOutcome::Saved,
                Ok(SaveAck::Duplicate) => SaveOutcome::Duplicate,
                Ok(SaveAck::Rejected { message }) => SaveOutcome::Failed { message },
                Err(err) => {
                    popup_warn!("save request {} failed: {}", request, err);
                    SaveOutcome::Failed { message: None }
                }
            },
        },
    }
}

fn map_prediction(prediction: Prediction) -> Classification {
    Classification {
        url: prediction.url,
        title: prediction.title,
        site_name: prediction.site_name,
        category: prediction.category,
        tags: TagSet::from_list(prediction.tags),
        content: prediction.content,
        favicon_url: prediction.favicon_url,
    }
}

fn map_payload(payload: SavePayload) -> SaveRequest {
    SaveRequest {
        url: payload.url,
        title: payload.title,
        site_name: payload.site_name,
        category: payload.category,
        tags: payload.tags,
        content: payload.content,
        favicon_url: payload.favicon_url,
    }
}

#[cfg(test)]
mod tests {
    use bookmarker_client::{FailureKind, Prediction, SaveAck, ServiceError, ServiceEvent};
    use bookmarker_core::{AnalysisOutcome, Classification, Msg, SaveOutcome, TagSet};

    use super::map_event;

    fn network_error() -> ServiceError {
        ServiceError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn successful_prediction_becomes_a_classification() {
        let event = ServiceEvent::AnalysisDone {
            request: 4,
            result: Ok(Prediction {
                url: "https://example.com/page".to_string(),
                title: "An Article".to_string(),
                site_name: "Example".to_string(),
                category: "News & Politics".to_string(),
                tags: vec!["rust".to_string(), " web ".to_string()],
                content: "Body text".to_string(),
                favicon_url: None,
            }),
        };

        assert_eq!(
            map_event(event),
            Msg::AnalysisCompleted {
                request: 4,
                outcome: AnalysisOutcome::Success(Classification {
                    url: "https://example.com/page".to_string(),
                    title: "An Article".to_string(),
                    site_name: "Example".to_string(),
                    category: "News & Politics".to_string(),
                    tags: TagSet::from_list(["rust", "web"]),
                    content: "Body text".to_string(),
                    favicon_url: None,
                }),
            }
        );
    }

    #[test]
    fn failed_analysis_collapses_to_the_plain_outcome() {
        let event = ServiceEvent::AnalysisDone {
            request: 6,
            result: Err(network_error()),
        };

        assert_eq!(
            map_event(event),
            Msg::AnalysisCompleted {
                request: 6,
                outcome: AnalysisOutcome::Failed,
            }
        );
    }

    #[test]
    fn save_transport_error_carries_no_message() {
        let event = ServiceEvent::SaveDone {
            request: 9,
            result: Err(network_error()),
        };

        assert_eq!(
            map_event(event),
            Msg::SaveCompleted {
                request: 9,
                outcome: SaveOutcome::Failed { message: None },
            }
        );
    }

    #[test]
    fn save_rejection_keeps_the_service_message() {
        let event = ServiceEvent::SaveDone {
            request: 9,
            result: Ok(SaveAck::Rejected {
                message: Some("Failed to save content".to_string()),
            }),
        };

        assert_eq!(
            map_event(event),
            Msg::SaveCompleted {
                request: 9,
                outcome: SaveOutcome::Failed {
                    message: Some("Failed to save content".to_string()),
                },
            }
        );
    }

    #[test]
    fn save_acknowledgements_pass_through() {
        let saved = ServiceEvent::SaveDone {
            request: 2,
            result: Ok(SaveAck::Saved),
        };
        let duplicate = ServiceEvent::SaveDone {
            request: 3,
            result: Ok(SaveAck::Duplicate),
        };

        assert_eq!(
            map_event(saved),
            Msg::SaveCompleted {
                request: 2,
                outcome: SaveOutcome::Saved,
            }
        );
        assert_eq!(
            map_event(duplicate),
            Msg::SaveCompleted {
                request: 3,
                outcome: SaveOutcome::Duplicate,
            }
        );
    }
}
