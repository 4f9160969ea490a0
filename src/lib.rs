//! # Twilio API Rust Client
//!
//! An async Rust client core for the Twilio REST API: type-safe
//! configuration, a pluggable HTTP transport, uniform error mapping, and a
//! lazy pagination engine shared by every resource.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TwilioConfig`] and [`TwilioConfigBuilder`]
//! - Validated newtypes for credentials and base URLs
//! - An async HTTP client ([`HttpClient`]) behind the [`Transport`] trait
//! - A single request executor ([`RestClient`]) used by every operation
//! - Fetch/create/update/delete operations returning typed records
//! - Read operations returning a lazy [`rest::ResultSet`] that follows the
//!   server's continuation URIs on demand
//!
//! ## Quick Start
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("your-auth-token").unwrap())
//!     .default_page_size(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_page_size(), 100);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use twilio_api::RestClient;
//! use twilio_api::rest::{Deleter, Reader};
//! use twilio_api::rest::resources::api::v2010::{IncomingPhoneNumber, Local};
//!
//! let client = RestClient::new(config)?;
//!
//! let numbers = Local::read(account_sid)
//!     .by_friendly_name("lobby")
//!     .execute(&client)
//!     .await?
//!     .collect_all()
//!     .await?;
//!
//! for number in numbers {
//!     if let Some(sid) = number.sid {
//!         IncomingPhoneNumber::delete(account_sid, sid).execute(&client).await?;
//!     }
//! }
//! ```
//!
//! ## Testing Without a Network
//!
//! [`RestClient`] is generic over its [`Transport`]. Supplying an in-memory
//! transport through [`RestClient::with_transport`] exercises the whole
//! request/classify/paginate pipeline deterministically.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No hidden retries**: Every request is sent once; failures surface as-is

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccountSid, AuthToken, BaseUrl, Domain, TwilioConfig, TwilioConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, RestClient, Transport, TransportError,
};

// Re-export operation errors
pub use rest::{ApiError, ServerError};
