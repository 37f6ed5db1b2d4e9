//! Router-level tests for the comms-request endpoint
//!
//! The producer is mocked, so these cover routing, body validation, fan-out
//! counts and the exact response bodies of the gateway contract.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use gateway_api::{build_router, AppState};
use gateway_domain::{
    CommsEvent, CommsRequestService, DomainError, MockCommsEventProducer,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(producer: MockCommsEventProducer) -> Router {
    let service = Arc::new(CommsRequestService::new(Arc::new(producer)));
    build_router(AppState::new(service))
}

fn comms_request_body() -> Value {
    json!({
        "sbi": 123456789,
        "sourceSystem": "source",
        "notifyTemplateId": "d29257ce-974f-4214-8bbe-69ce5f2bb7f3",
        "commsType": "email",
        "recipient": "a@b.com",
        "personalisation": {},
        "reference": "email-reference",
        "emailReplyToId": "f824cbfa-f75c-40bb-8407-8edb0cc469d3"
    })
}

fn recipients(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("recipient-{i}@example.com")).collect()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_accepts_single_recipient() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .withf(|events: &[CommsEvent]| events.len() == 1 && events[0].data.recipient == "a@b.com")
        .times(1)
        .returning(|_| Ok(()));

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &comms_request_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        response_json(response).await,
        json!({ "message": "Communication request accepted" })
    );
}

#[tokio::test]
async fn test_versioned_alias_route() {
    let mut producer = MockCommsEventProducer::new();
    producer.expect_publish_all().times(1).returning(|_| Ok(()));

    let response = app(producer)
        .oneshot(post_json("/api/v1/comms-request", &comms_request_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_fans_out_one_event_per_recipient() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .withf(|events: &[CommsEvent]| {
            events.len() == 2
                && events[0].data.recipient == "a@b.com"
                && events[1].data.recipient == "c@d.com"
                && events[0].id != events[1].id
                && events[0].data.reference == events[1].data.reference
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut body = comms_request_body();
    body["recipient"] = json!(["a@b.com", "c@d.com"]);

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_handles_maximum_ten_recipients() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .withf(|events: &[CommsEvent]| events.len() == 10)
        .times(1)
        .returning(|_| Ok(()));

    let mut body = comms_request_body();
    body["recipient"] = json!(recipients(10));

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_rejects_more_than_ten_recipients() {
    let mut producer = MockCommsEventProducer::new();
    producer.expect_publish_all().times(0);

    let mut body = comms_request_body();
    body["recipient"] = json!(recipients(11));

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await,
        json!({
            "statusCode": 400,
            "message": "Invalid request payload",
            "details": "\"recipient\" must contain at most 10 items"
        })
    );
}

#[tokio::test]
async fn test_rejects_empty_recipient_list() {
    let mut producer = MockCommsEventProducer::new();
    producer.expect_publish_all().times(0);

    let mut body = comms_request_body();
    body["recipient"] = json!([]);

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("at least 1 items"));
}

#[tokio::test]
async fn test_rejects_missing_required_field() {
    let mut producer = MockCommsEventProducer::new();
    producer.expect_publish_all().times(0);

    let mut body = comms_request_body();
    body.as_object_mut().unwrap().remove("sbi");

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid request payload");
    assert!(body["details"].as_str().unwrap().contains("sbi"));
}

#[tokio::test]
async fn test_optional_fields_may_be_omitted() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .withf(|events: &[CommsEvent]| events[0].data.correlation_id.is_none())
        .times(1)
        .returning(|_| Ok(()));

    // comms_request_body already omits correlationId, crn and the
    // unsubscribe url
    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &comms_request_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_rejects_malformed_json() {
    let mut producer = MockCommsEventProducer::new();
    producer.expect_publish_all().times(0);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/comms-request")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not-json"))
        .unwrap();

    let response = app(producer).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await["message"],
        "Invalid request payload"
    );
}

#[tokio::test]
async fn test_publish_failure_returns_generic_500() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .times(1)
        .returning(|_| Err(DomainError::PublishError(anyhow::anyhow!("NATS is down"))));

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &comms_request_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Fixed body with no internal detail leaked
    assert_eq!(
        response_json(response).await,
        json!({
            "statusCode": 500,
            "message": "Failed to process request"
        })
    );
}

#[tokio::test]
async fn test_partial_batch_failure_returns_generic_500() {
    let mut producer = MockCommsEventProducer::new();
    producer
        .expect_publish_all()
        .times(1)
        .returning(|_| Err(DomainError::PartialBatchFailure { failed: 1 }));

    let mut body = comms_request_body();
    body["recipient"] = json!(recipients(3));

    let response = app(producer)
        .oneshot(post_json("/v1/comms-request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({
            "statusCode": 500,
            "message": "Failed to process request"
        })
    );
}

#[tokio::test]
async fn test_health() {
    let producer = MockCommsEventProducer::new();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(producer).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({ "message": "success" }));
}
