//! Outbound message assembly.
//!
//! [`Message::assemble`] is a pure data transformation: it injects the
//! configured delivery-agent identity, requires the four mandatory top-level
//! parameters, and copies caller-supplied sub-structures verbatim. Nested
//! field names and value formats are not validated here; a malformed nested
//! field is only rejected by the remote service at delivery time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DeliveryAgent;
use crate::wire::{self, SerializeError};

/// Caller-supplied parameters for one message submission.
///
/// Expected shape of the nested mappings:
///
/// ```text
/// campaign_id:  String
/// recipient:    { member_office, is_response_requested?, newsletter_opt_in? }
/// organization: { name?, contact: { name?, email?, phone?, about? }? }
/// constituent:  { prefix, first_name, middle_name?, last_name, suffix?,
///                 title?, organization?, address: [String], city,
///                 state_abbreviation, zip, phone?, address_validation?,
///                 email, email_validation? }
/// message:      { subject, library_of_congress_topics: [String],
///                 bills: [{ congress?, type_abbreviation, number }]?,
///                 pro_or_con?, organization_statement?,
///                 constituent_message?, more_info? }
/// ```
///
/// Use `constituent_message` for a personal message, `organization_statement`
/// for a campaign message. At least one of the two must be given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageParams {
    /// Caller-defined identifier grouping related submissions. Mandatory.
    pub campaign_id: Option<String>,
    /// Recipient routing; `member_office` is the recipient key. Mandatory.
    pub recipient: Option<Map<String, Value>>,
    /// Organization info shown alongside the message. Optional.
    pub organization: Option<Map<String, Value>>,
    /// The individual sender. Mandatory.
    pub constituent: Option<Map<String, Value>>,
    /// The message content itself. Mandatory.
    pub message: Option<Map<String, Value>>,
}

/// Message assembly errors, raised before any network I/O.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// A mandatory top-level parameter was absent.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// `message.library_of_congress_topics` was absent or empty.
    #[error("message.library_of_congress_topics must contain at least one topic")]
    EmptyTopics,

    /// Neither `organization_statement` nor `constituent_message` was given.
    #[error("message requires organization_statement or constituent_message")]
    MissingMessageBody,
}

/// Delivery envelope: agent identity, campaign, optional organization info.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// The submitting organization, from resolved configuration.
    pub agent: DeliveryAgent,
    /// Caller-supplied organization info; empty when omitted.
    pub organization: Map<String, Value>,
    /// Caller-defined campaign identifier.
    pub campaign_id: String,
}

/// A fully-assembled message, ready for one delivery.
///
/// Created fresh per submission; the remote service assigns no durable
/// identifier visible to this client.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Delivery envelope.
    pub delivery: Delivery,
    /// Recipient routing, copied verbatim from the caller.
    pub recipient: Map<String, Value>,
    /// Sender description, copied verbatim from the caller.
    pub constituent: Map<String, Value>,
    /// Message content, copied verbatim from the caller.
    pub message: Map<String, Value>,
}

impl Message {
    /// Assemble a message from resolved delivery-agent identity and caller
    /// parameters.
    ///
    /// # Errors
    ///
    /// - [`MessageError::MissingParameter`] when `campaign_id`, `recipient`,
    ///   `constituent`, or `message` is absent
    /// - [`MessageError::EmptyTopics`] when
    ///   `message.library_of_congress_topics` is absent or an empty array
    /// - [`MessageError::MissingMessageBody`] when the message carries
    ///   neither `organization_statement` nor `constituent_message`
    pub fn assemble(agent: DeliveryAgent, params: MessageParams) -> Result<Self, MessageError> {
        let campaign_id = params
            .campaign_id
            .ok_or(MessageError::MissingParameter("campaign_id"))?;
        let recipient = params
            .recipient
            .ok_or(MessageError::MissingParameter("recipient"))?;
        let constituent = params
            .constituent
            .ok_or(MessageError::MissingParameter("constituent"))?;
        let message = params
            .message
            .ok_or(MessageError::MissingParameter("message"))?;

        // Other malformed shapes are left for the service to reject.
        let topics_missing = match message.get("library_of_congress_topics") {
            None => true,
            Some(Value::Array(topics)) => topics.is_empty(),
            Some(_) => false,
        };
        if topics_missing {
            return Err(MessageError::EmptyTopics);
        }

        if !message.contains_key("organization_statement")
            && !message.contains_key("constituent_message")
        {
            return Err(MessageError::MissingMessageBody);
        }

        Ok(Self {
            delivery: Delivery {
                agent,
                organization: params.organization.unwrap_or_default(),
                campaign_id,
            },
            recipient,
            constituent,
            message,
        })
    }

    /// Serialize to the XML wire document the service expects.
    ///
    /// # Errors
    /// Returns [`SerializeError`] if the document cannot be written.
    pub fn to_xml(&self) -> Result<String, SerializeError> {
        wire::to_xml(self)
    }
}
