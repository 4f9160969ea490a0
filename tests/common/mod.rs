//! Shared helpers for integration tests.
//!
//! [`ScriptedTransport`] replays canned responses in order and records every
//! request it receives, so tests can assert both what the client returned
//! and exactly what it sent.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use twilio_api::clients::{HttpRequest, HttpResponse, Transport, TransportError};
use twilio_api::{AccountSid, AuthToken, RestClient, TwilioConfig};

pub const ACCOUNT_SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Creates a valid test configuration.
pub fn test_config() -> TwilioConfig {
    TwilioConfig::builder()
        .account_sid(AccountSid::new(ACCOUNT_SID).unwrap())
        .auth_token(AuthToken::new("test-auth-token").unwrap())
        .build()
        .unwrap()
}

/// A transport that replays scripted outcomes in order.
///
/// Once the script is exhausted every further call fails as if the server
/// were unreachable.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Option<(u16, String)>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn respond(self, code: u16, body: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Some((code, body.into())));
        self
    }

    /// Queues a JSON response.
    pub fn respond_json(self, code: u16, body: serde_json::Value) -> Self {
        self.respond(code, body.to_string())
    }

    /// Queues a connectivity failure.
    pub fn fail(self) -> Self {
        self.script.lock().unwrap().push_back(None);
        self
    }

    /// Returns every request sent so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the number of requests sent so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut headers = HashMap::new();
        headers.insert(
            "twilio-request-id".to_string(),
            vec!["RQaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string()],
        );

        match self.script.lock().unwrap().pop_front().flatten() {
            Some((code, body)) => Ok(HttpResponse::new(code, headers, body)),
            None => Err(TransportError::InvalidUrl {
                url: "scripted-unreachable".to_string(),
            }),
        }
    }
}

/// Creates a client over a scripted transport.
pub fn scripted_client(transport: ScriptedTransport) -> RestClient<ScriptedTransport> {
    RestClient::with_transport(test_config(), transport)
}
