//! Client for the Communicating with Congress message-delivery API.
//!
//! Assembles constituent advocacy messages from caller-supplied data plus
//! configured delivery-agent credentials, submits them as XML over HTTP, and
//! translates service rejections into a structured multi-error result. Also
//! exposes the directory of supported legislative office codes for routing
//! validation before submission.
//!
//! # Example
//!
//! ```ignore
//! use cwc::{Client, ClientConfig, MessageParams};
//!
//! cwc::configure(ClientConfig::load()?);
//!
//! let client = Client::new(ClientConfig::default())?;
//! assert!(client.office_supported("HCA01").await?);
//!
//! let message = client.create_message(params)?;
//! client.deliver(&message).await?;
//! ```

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod client;
pub mod config;
pub mod message;
pub mod office;
pub mod topic_codes;
pub mod wire;

pub use client::{Client, DeliveryError};
pub use config::{configure, ClientConfig, ClientOptions, ConfigError, DeliveryAgent};
pub use message::{Message, MessageError, MessageParams};
pub use office::Office;
