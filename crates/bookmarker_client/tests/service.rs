use std::time::Duration;

use bookmarker_client::{
    FailureKind, SaveAck, SaveRequest, ServiceEvent, ServiceHandle, ServiceSettings,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(handle: &ServiceHandle) -> ServiceEvent {
    for _ in 0..300 {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no service event before the deadline");
}

#[tokio::test]
async fn classification_comes_back_with_its_request_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "url": "https://example.com/article",
            "title": "An Article",
            "site_name": "Example",
            "category": "reference",
            "tags": ["rust"],
            "content": "short preview"
        })))
        .mount(&server)
        .await;

    let handle = ServiceHandle::new(ServiceSettings::with_base_url(server.uri()));
    handle.classify(7, "https://example.com/article");

    match next_event(&handle).await {
        ServiceEvent::AnalysisDone { request, result } => {
            assert_eq!(request, 7);
            let prediction = result.expect("classification ok");
            assert_eq!(prediction.title, "An Article");
            assert_eq!(prediction.tags, vec!["rust"]);
        }
        other => panic!("expected an analysis event, got {other:?}"),
    }
}

#[tokio::test]
async fn save_comes_back_with_its_request_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let handle = ServiceHandle::new(ServiceSettings::with_base_url(server.uri()));
    handle.save(
        9,
        SaveRequest {
            url: "https://example.com/article".to_string(),
            title: "An Article".to_string(),
            site_name: "Example".to_string(),
            category: String::new(),
            tags: Vec::new(),
            content: String::new(),
            favicon_url: "default-icon.png".to_string(),
        },
    );

    match next_event(&handle).await {
        ServiceEvent::SaveDone { request, result } => {
            assert_eq!(request, 9);
            assert_eq!(result.expect("save ok"), SaveAck::Saved);
        }
        other => panic!("expected a save event, got {other:?}"),
    }
}

#[tokio::test]
async fn failures_travel_back_as_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let handle = ServiceHandle::new(ServiceSettings::with_base_url(server.uri()));
    handle.classify(3, "https://example.com/article");

    match next_event(&handle).await {
        ServiceEvent::AnalysisDone { request, result } => {
            assert_eq!(request, 3);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
        other => panic!("expected an analysis event, got {other:?}"),
    }
}
