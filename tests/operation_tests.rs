//! Integration tests for single-shot operations.
//!
//! Covers how fetch, create, update and delete classify responses: the
//! expected status decodes, anything else maps to a structured error.

mod common;

use common::{scripted_client, test_config, ScriptedTransport, ACCOUNT_SID};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use twilio_api::clients::HttpMethod;
use twilio_api::rest::resources::api::v2010::{
    CallFeedback, FeedbackIssue, IncomingPhoneNumber, Recording, Sandbox,
};
use twilio_api::rest::{ApiError, Creator, Deleter, Fetcher, OperationKind, SuccessStatuses};
use twilio_api::{RestClient, TwilioConfig};

const REQUEST_ID: &str = "RQaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

fn recording_json() -> serde_json::Value {
    json!({
        "sid": "RE557ce644e5ab84fa21cc21112e22c485",
        "account_sid": ACCOUNT_SID,
        "call_sid": "CA8dfedb55c129dd4d6bd1f59af9d11080",
        "api_version": "2010-04-01",
        "duration": "6",
        "price": "-0.0025",
        "price_unit": "USD",
        "date_created": "Fri, 14 Oct 2016 21:56:34 +0000",
        "date_updated": "Fri, 14 Oct 2016 21:56:38 +0000",
        "uri": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Recordings/RE557ce644e5ab84fa21cc21112e22c485.json"
    })
}

// ============================================================================
// Fetch
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_record() {
    let client = scripted_client(ScriptedTransport::new().respond_json(200, recording_json()));

    let recording = assert_ok!(
        Recording::fetch(ACCOUNT_SID, "RE557ce644e5ab84fa21cc21112e22c485")
            .execute(&client)
            .await
    );

    assert_eq!(
        recording.sid.as_deref(),
        Some("RE557ce644e5ab84fa21cc21112e22c485")
    );
    assert_eq!(recording.duration.as_deref(), Some("6"));
    assert_eq!(recording.price, Some(-0.0025));
    assert_eq!(
        recording.date_created.map(|date| date.to_rfc3339()),
        Some("2016-10-14T21:56:34+00:00".to_string())
    );

    let requests = client.transport().requests();
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.target.to_string(),
        "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Recordings/RE557ce644e5ab84fa21cc21112e22c485.json"
    );
    assert!(request.query.is_empty());
    assert!(request.form.is_empty());
}

#[tokio::test]
async fn test_fetch_is_deterministic_for_identical_responses() {
    let client = scripted_client(
        ScriptedTransport::new()
            .respond_json(200, recording_json())
            .respond_json(200, recording_json()),
    );

    let first = assert_ok!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);
    let second = assert_ok!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_server_error_with_vendor_document() {
    let client = scripted_client(
        ScriptedTransport::new().respond_json(500, json!({"message": "boom", "code": 20500})),
    );

    let error = assert_err!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);

    match error {
        ApiError::Server(server) => {
            assert_eq!(server.message, "boom");
            assert_eq!(server.code, Some(20500));
            assert_eq!(server.http_status, 500);
            assert_eq!(server.request_id.as_deref(), Some(REQUEST_ID));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_without_body() {
    let client = scripted_client(ScriptedTransport::new().respond(500, ""));

    let error = assert_err!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);

    assert_eq!(error.message(), "Server Error, no content");
    assert_eq!(error.code(), None);
    assert_eq!(error.http_status(), Some(500));
}

#[tokio::test]
async fn test_fetch_non_json_error_page_uses_placeholder_message() {
    let client = scripted_client(ScriptedTransport::new().respond(502, "<html>Bad Gateway</html>"));

    let error = assert_err!(Sandbox::fetch(ACCOUNT_SID).execute(&client).await);

    assert_eq!(error.to_string(), "Server Error, no content");
}

#[tokio::test]
async fn test_fetch_unexpected_success_status_is_rejected() {
    let client = scripted_client(ScriptedTransport::new().respond_json(201, recording_json()));

    let error = assert_err!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);

    assert_eq!(error.http_status(), Some(201));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_decode_error() {
    let client = scripted_client(ScriptedTransport::new().respond(200, "not json"));

    let error = assert_err!(Recording::fetch(ACCOUNT_SID, "RE1").execute(&client).await);

    assert!(matches!(
        error,
        ApiError::Decode {
            resource: "Recording",
            operation: OperationKind::Fetch,
            ..
        }
    ));
    assert_eq!(error.http_status(), None);
}

#[tokio::test]
async fn test_fetch_connection_failure() {
    let client = scripted_client(ScriptedTransport::new().fail());

    let error = assert_err!(Sandbox::fetch(ACCOUNT_SID).execute(&client).await);

    assert!(error.is_connection());
    assert_eq!(error.to_string(), "Sandbox fetch failed: unable to connect to server");
    assert_eq!(error.request_id(), None);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_succeeds_on_no_content() {
    let client = scripted_client(ScriptedTransport::new().respond(204, ""));

    assert_ok!(
        IncomingPhoneNumber::delete(ACCOUNT_SID, "PN1")
            .execute(&client)
            .await
    );

    let requests = client.transport().requests();
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(
        request.target.to_string(),
        "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/IncomingPhoneNumbers/PN1.json"
    );
}

#[tokio::test]
async fn test_delete_not_found_maps_every_error_field() {
    let client = scripted_client(ScriptedTransport::new().respond_json(
        404,
        json!({
            "message": "not found",
            "code": 20404,
            "status": 404,
            "more_info": "https://www.twilio.com/docs/errors/20404"
        }),
    ));

    let error = assert_err!(Recording::delete(ACCOUNT_SID, "RE1").execute(&client).await);

    assert_eq!(error.message(), "not found");
    assert_eq!(error.code(), Some(20404));
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.http_status(), Some(404));
    assert_eq!(
        error.more_info(),
        Some("https://www.twilio.com/docs/errors/20404")
    );
    assert_eq!(error.request_id(), Some(REQUEST_ID));
}

#[tokio::test]
async fn test_delete_with_ok_instead_of_no_content_is_rejected() {
    let client = scripted_client(ScriptedTransport::new().respond(200, "{}"));

    let error = assert_err!(Recording::delete(ACCOUNT_SID, "RE1").execute(&client).await);

    assert!(matches!(error, ApiError::Server(_)));
    assert_eq!(error.http_status(), Some(200));
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_sends_form_and_expects_created() {
    let client = scripted_client(ScriptedTransport::new().respond_json(
        201,
        json!({
            "account_sid": ACCOUNT_SID,
            "quality_score": 2,
            "issues": ["audio-latency", "dropped-call"]
        }),
    ));

    let feedback = assert_ok!(
        CallFeedback::create(ACCOUNT_SID, "CA1", 2)
            .issues([FeedbackIssue::AudioLatency, FeedbackIssue::DroppedCall])
            .execute(&client)
            .await
    );

    assert_eq!(feedback.quality_score, Some(2));

    let requests = client.transport().requests();
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.target.to_string(),
        "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Calls/CA1/Feedback.json"
    );
    let form: Vec<_> = request.form.iter().collect();
    assert_eq!(
        form,
        vec![
            ("QualityScore", "2"),
            ("Issue", "audio-latency"),
            ("Issue", "dropped-call"),
        ]
    );
}

#[tokio::test]
async fn test_create_with_ok_status_fails_under_default_expectations() {
    let client = scripted_client(ScriptedTransport::new().respond_json(200, json!({})));

    let error = assert_err!(CallFeedback::create(ACCOUNT_SID, "CA1", 5).execute(&client).await);

    assert_eq!(error.http_status(), Some(200));
}

#[tokio::test]
async fn test_configured_success_status_overrides_default() {
    let config = TwilioConfig::builder()
        .account_sid(test_config().account_sid().clone())
        .auth_token(test_config().auth_token().clone())
        .success_statuses(SuccessStatuses::default().with(OperationKind::Create, 200))
        .build()
        .unwrap();
    let client = RestClient::with_transport(
        config,
        ScriptedTransport::new().respond_json(200, json!({"quality_score": 5})),
    );

    let feedback = assert_ok!(CallFeedback::create(ACCOUNT_SID, "CA1", 5).execute(&client).await);

    assert_eq!(feedback.quality_score, Some(5));
}
