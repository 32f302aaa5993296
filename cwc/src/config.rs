//! Client configuration loading and resolution.
//!
//! Credentials are assembled from two layers:
//!
//! 1. A process-wide default configuration, set once at startup via
//!    [`configure`] (typically populated by [`ClientConfig::load`]).
//! 2. Per-instance overrides passed at client construction.
//!
//! Overrides win key-by-key; defaults fill the gaps. All seven credential
//! keys must be present after the merge or construction fails with
//! [`ConfigError::MissingConfiguration`] naming the missing key.
//!
//! [`ClientConfig::load`] follows the layered figment pattern: struct
//! defaults, then a `cwc.yaml` file (if it exists), then `CWC_`-prefixed
//! environment variables (always win).

use std::sync::{PoisonError, RwLock};

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Partial client configuration; any subset of the recognized keys.
///
/// Used both as the process-wide default record and as per-instance
/// overrides. Resolution into [`ClientOptions`] validates that every key is
/// present in the merged result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key issued to the delivery agent.
    pub api_key: Option<String>,

    /// Base URL of the target service.
    pub host: Option<String>,

    /// Delivery agent organization name; must match the API key owner.
    pub delivery_agent: Option<String>,

    /// Email address acknowledgements are sent to.
    pub delivery_agent_ack_email: Option<String>,

    /// Name of the delivery agent's technical contact.
    pub delivery_agent_contact_name: Option<String>,

    /// Email of the delivery agent's technical contact.
    pub delivery_agent_contact_email: Option<String>,

    /// Phone of the delivery agent's technical contact, format xxx-xxx-xxxx.
    pub delivery_agent_contact_phone: Option<String>,
}

/// Process-wide default configuration.
///
/// Written by [`configure`] once at startup, read by every subsequent client
/// construction. Single-writer-at-a-time usage: callers must not reconfigure
/// concurrently with client construction.
static DEFAULT_CONFIG: RwLock<ClientConfig> = RwLock::new(ClientConfig::empty());

/// Replace the process-wide default client configuration.
///
/// Idempotent; last write wins. Intended to be called once at startup,
/// before clients are constructed.
pub fn configure(config: ClientConfig) {
    let mut defaults = DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *defaults = config;
}

/// Snapshot of the process-wide default configuration.
#[must_use]
pub fn default_configuration() -> ClientConfig {
    DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

impl ClientConfig {
    const fn empty() -> Self {
        Self {
            api_key: None,
            host: None,
            delivery_agent: None,
            delivery_agent_ack_email: None,
            delivery_agent_contact_name: None,
            delivery_agent_contact_email: None,
            delivery_agent_contact_phone: None,
        }
    }

    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest; no credential has a compiled-in value)
    /// 2. `cwc.yaml` file (if it exists)
    /// 3. Environment variables with `CWC_` prefix (highest)
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a
    /// value fails to deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("cwc.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a
    /// value fails to deserialize.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("CWC_"))
            .extract()?;
        Ok(config)
    }

    /// Merge `overrides` over `self`, key-by-key.
    ///
    /// A key set in `overrides` fully replaces the default; unset keys fall
    /// through. The merge is shallow: there is no deeper structure to
    /// reconcile.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            api_key: overrides.api_key.or(self.api_key),
            host: overrides.host.or(self.host),
            delivery_agent: overrides.delivery_agent.or(self.delivery_agent),
            delivery_agent_ack_email: overrides
                .delivery_agent_ack_email
                .or(self.delivery_agent_ack_email),
            delivery_agent_contact_name: overrides
                .delivery_agent_contact_name
                .or(self.delivery_agent_contact_name),
            delivery_agent_contact_email: overrides
                .delivery_agent_contact_email
                .or(self.delivery_agent_contact_email),
            delivery_agent_contact_phone: overrides
                .delivery_agent_contact_phone
                .or(self.delivery_agent_contact_phone),
        }
    }
}

/// The organization on whose behalf messages are submitted.
///
/// Distinct from the constituent, who authors the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAgent {
    /// Organization name; must match the API key owner.
    pub name: String,
    /// Email address acknowledgements are sent to.
    pub ack_email: String,
    /// Technical contact name.
    pub contact_name: String,
    /// Technical contact email.
    pub contact_email: String,
    /// Technical contact phone, format xxx-xxx-xxxx.
    pub contact_phone: String,
}

/// Immutable, fully-resolved client options.
///
/// Built once per client instance; every field is guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API key appended to every request.
    pub api_key: String,
    /// Base URL of the target service.
    pub host: String,
    /// Delivery agent identity injected into every message.
    pub delivery_agent: DeliveryAgent,
}

impl ClientOptions {
    /// Merge `overrides` over `defaults` and validate that every required
    /// key is present.
    ///
    /// Validation is eager: a missing credential fails client construction,
    /// never a later delivery.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingConfiguration`] naming the first
    /// missing key.
    pub fn resolve(defaults: ClientConfig, overrides: ClientConfig) -> Result<Self, ConfigError> {
        let merged = defaults.merge(overrides);
        Ok(Self {
            api_key: require(merged.api_key, "api_key")?,
            host: require(merged.host, "host")?,
            delivery_agent: DeliveryAgent {
                name: require(merged.delivery_agent, "delivery_agent")?,
                ack_email: require(merged.delivery_agent_ack_email, "delivery_agent_ack_email")?,
                contact_name: require(
                    merged.delivery_agent_contact_name,
                    "delivery_agent_contact_name",
                )?,
                contact_email: require(
                    merged.delivery_agent_contact_email,
                    "delivery_agent_contact_email",
                )?,
                contact_phone: require(
                    merged.delivery_agent_contact_phone,
                    "delivery_agent_contact_phone",
                )?,
            },
        })
    }
}

fn require(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value.ok_or(ConfigError::MissingConfiguration(key))
}

/// Configuration loading and resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required key was absent after merging defaults and overrides.
    #[error("missing configuration key: {0}")]
    MissingConfiguration(&'static str),

    /// A figment source failed to load or deserialize.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
