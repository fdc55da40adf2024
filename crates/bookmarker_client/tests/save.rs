use bookmarker_client::{FailureKind, HttpRecorder, Recorder, SaveAck, SaveRequest, ServiceSettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> SaveRequest {
    SaveRequest {
        url: "https://example.com/article".to_string(),
        title: "An Article".to_string(),
        site_name: "Example".to_string(),
        category: "reference".to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        content: "short preview".to_string(),
        favicon_url: "default-icon.png".to_string(),
    }
}

#[tokio::test]
async fn accepted_submission_is_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .and(body_json(json!({
            "url": "https://example.com/article",
            "title": "An Article",
            "site_name": "Example",
            "category": "reference",
            "tags": ["rust", "web"],
            "content": "short preview",
            "favicon_url": "default-icon.png"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Content saved successfully",
            "status": "success"
        })))
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let ack = recorder.save(&submission()).await.expect("save ok");

    assert_eq!(ack, SaveAck::Saved);
}

#[tokio::test]
async fn duplicate_link_is_reported_distinctly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "This link already exists in the database.",
            "status": "duplicate"
        })))
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let ack = recorder.save(&submission()).await.expect("save ok");

    assert_eq!(ack, SaveAck::Duplicate);
}

#[tokio::test]
async fn rejection_body_supplies_the_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Failed to save content" })),
        )
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let ack = recorder.save(&submission()).await.expect("body parsed");

    assert_eq!(
        ack,
        SaveAck::Rejected {
            message: Some("Failed to save content".to_string())
        }
    );
}

#[tokio::test]
async fn rejection_without_any_message_is_still_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let ack = recorder.save(&submission()).await.expect("body parsed");

    assert_eq!(ack, SaveAck::Rejected { message: None });
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_the_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let err = recorder.save(&submission()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
}

#[tokio::test]
async fn unparseable_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let recorder = HttpRecorder::new(ServiceSettings::with_base_url(server.uri()));
    let err = recorder.save(&submission()).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}
