//! The delivery client.
//!
//! Orchestrates one submission: builds the action URL, serializes the
//! message, issues the HTTP POST, and translates a 400 response into a
//! structured multi-error [`DeliveryError::Rejected`]. Also resolves the
//! office directory, embedded for the production host and live-fetched for
//! any other.
//!
//! # Example
//!
//! ```ignore
//! use cwc::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig {
//!     api_key: Some("key".into()),
//!     host: Some("https://cwc.house.gov".into()),
//!     ..ClientConfig::default()
//! })?;
//!
//! let message = client.create_message(params)?;
//! client.deliver(&message).await?;
//! ```

use reqwest::{header::CONTENT_TYPE, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{default_configuration, ClientConfig, ClientOptions, ConfigError};
use crate::message::{Message, MessageError, MessageParams};
use crate::office::{self, Office};
use crate::wire::{self, SerializeError};

/// Fixed path for message submission.
const MESSAGE_PATH: &str = "/v2/message";

/// Path of the live office directory on non-production hosts.
const OFFICES_PATH: &str = "/offices";

/// Errors that can occur when talking to the delivery service.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// HTTP transport failed, or the service answered with an error status
    /// other than 400. Surfaced unmodified; this layer adds no retry and no
    /// further semantics.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the submission with a 400 response.
    #[error("message rejected by the service: {}", errors.join("; "))]
    Rejected {
        /// Human-readable error messages in document order. Never empty:
        /// when the error document yields nothing, the single entry is the
        /// raw response body.
        errors: Vec<String>,
        /// The underlying status error from the transport.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The outbound message could not be serialized.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Client for the Communicating with Congress API.
///
/// Holds immutable resolved options and a `reqwest` client; no per-call
/// state. Each call blocks the calling task for one HTTP round trip; there
/// are no retries and no timeouts beyond what the transport imposes.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    options: ClientOptions,
}

impl Client {
    /// Construct a client by merging `overrides` over the process-wide
    /// default configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingConfiguration`] if a required key is
    /// absent after the merge. This is raised here, never at delivery time.
    pub fn new(overrides: ClientConfig) -> Result<Self, ConfigError> {
        Self::with_http_client(reqwest::Client::new(), overrides)
    }

    /// Construct with a custom `reqwest::Client`, e.g. to set timeouts.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingConfiguration`] if a required key is
    /// absent after the merge.
    pub fn with_http_client(
        http: reqwest::Client,
        overrides: ClientConfig,
    ) -> Result<Self, ConfigError> {
        let options = ClientOptions::resolve(default_configuration(), overrides)?;
        Ok(Self { http, options })
    }

    /// The resolved options this client was constructed with.
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Assemble a message: delivery-agent identity from configuration,
    /// campaign and sub-structures from `params`. Pure; no I/O.
    ///
    /// # Errors
    /// Returns [`MessageError`] when a mandatory parameter is absent; see
    /// [`Message::assemble`].
    pub fn create_message(&self, params: MessageParams) -> Result<Message, MessageError> {
        Message::assemble(self.options.delivery_agent.clone(), params)
    }

    /// Build an action URL: host and path joined without duplicate slashes,
    /// API key appended as the `apikey` query parameter.
    #[must_use]
    pub fn action(&self, path: &str) -> String {
        let host = self.options.host.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!(
            "{host}/{path}?apikey={}",
            urlencoding::encode(&self.options.api_key)
        )
    }

    /// Submit a message.
    ///
    /// All-or-nothing per call: success means the service accepted the
    /// submission (any 2xx; the response body is not inspected).
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::Rejected`] on a 400 response, carrying every
    ///   `Error` element from the response document
    /// - [`DeliveryError::Transport`] for connection failures, timeouts,
    ///   and non-400 error statuses
    pub async fn deliver(&self, message: &Message) -> Result<(), DeliveryError> {
        let body = message.to_xml()?;
        debug!(
            campaign_id = %message.delivery.campaign_id,
            "submitting message"
        );

        let response = self
            .http
            .post(self.action(MESSAGE_PATH))
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let source = response.error_for_status_ref().err();
            let raw = response.text().await?;
            let mut errors = wire::error_messages(&raw);
            if errors.is_empty() {
                errors.push(raw);
            }
            warn!(count = errors.len(), "message rejected by the service");
            return Err(DeliveryError::Rejected { errors, source });
        }

        response.error_for_status()?;
        debug!("message accepted");
        Ok(())
    }

    /// The currently supported offices.
    ///
    /// Against the production host this is the embedded directory and
    /// involves no network I/O. Any other host is fetched live from
    /// `/offices`, with a fresh request on every call; nothing is cached.
    ///
    /// # Errors
    /// Returns [`DeliveryError::Transport`] if the live fetch fails or the
    /// body is not a JSON array of code strings.
    pub async fn offices(&self) -> Result<Vec<Office>, DeliveryError> {
        if office::is_production_host(&self.options.host) {
            return Ok(office::production_offices());
        }

        debug!("fetching live office directory");
        let response = self
            .http
            .get(self.action(OFFICES_PATH))
            .send()
            .await?
            .error_for_status()?;
        let codes: Vec<String> = response.json().await?;
        Ok(codes.into_iter().map(Office::new).collect())
    }

    /// True when `code` names a currently supported office.
    ///
    /// # Errors
    /// Returns [`DeliveryError::Transport`] if the live directory fetch
    /// fails.
    pub async fn office_supported(&self, code: &str) -> Result<bool, DeliveryError> {
        let offices = self.offices().await?;
        Ok(offices.iter().any(|office| office.code() == code))
    }
}
