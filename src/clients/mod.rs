//! HTTP client types for Twilio API communication.
//!
//! This module provides the transport layer: request and response types,
//! the [`Transport`] seam, the `reqwest`-backed [`HttpClient`], and the
//! [`RestClient`] executor built on top of them.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Params`]: Ordered query/form parameters
//! - [`Transport`]: The trait the executor sends requests through
//! - [`TransportError`]: No response could be obtained
//! - [`rest::RestClient`]: The request executor
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//! use twilio_api::Domain;
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, Domain::Pricing, "/v1/Messaging/Countries")
//!     .query_param("PageSize", "20")
//!     .build();
//!
//! let response = client.send(&request).await?;
//! println!("{} {}", response.code, response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. A request is sent once; a missing response surfaces as
//! [`TransportError`], and any received response is returned as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::TransportError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, Params, RequestTarget};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use rest::RestClient;
