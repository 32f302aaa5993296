//! XML wire format.
//!
//! Two halves, both independent of the HTTP layer:
//!
//! - [`to_xml`] renders an assembled [`Message`] as the XML document the
//!   service expects. Element names are the PascalCase form of the field
//!   keys (`campaign_id` becomes `CampaignId`); sequences render as
//!   repeated elements of the same name.
//! - [`error_messages`] extracts every `Error` element from a service error
//!   document, in document order. Pure parse function so rejection handling
//!   stays unit-testable without a transport.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::{Map, Value};

use crate::message::Message;

/// The outbound document could not be written.
#[derive(Debug, thiserror::Error)]
#[error("failed to serialize message to XML: {0}")]
pub struct SerializeError(String);

impl SerializeError {
    fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// Render a message as the XML wire document, rooted at `CWC`.
///
/// # Errors
/// Returns [`SerializeError`] if an event cannot be written.
pub fn to_xml(message: &Message) -> Result<String, SerializeError> {
    let mut writer = Writer::new(Vec::new());

    start(&mut writer, "CWC")?;

    start(&mut writer, "Delivery")?;
    start(&mut writer, "Agent")?;
    text_element(&mut writer, "Name", &message.delivery.agent.name)?;
    text_element(&mut writer, "AckEmail", &message.delivery.agent.ack_email)?;
    text_element(&mut writer, "ContactName", &message.delivery.agent.contact_name)?;
    text_element(
        &mut writer,
        "ContactEmail",
        &message.delivery.agent.contact_email,
    )?;
    text_element(
        &mut writer,
        "ContactPhone",
        &message.delivery.agent.contact_phone,
    )?;
    end(&mut writer, "Agent")?;
    object_element(&mut writer, "Organization", &message.delivery.organization)?;
    text_element(&mut writer, "CampaignId", &message.delivery.campaign_id)?;
    end(&mut writer, "Delivery")?;

    object_element(&mut writer, "Recipient", &message.recipient)?;
    object_element(&mut writer, "Constituent", &message.constituent)?;
    object_element(&mut writer, "Message", &message.message)?;

    end(&mut writer, "CWC")?;

    String::from_utf8(writer.into_inner()).map_err(SerializeError::new)
}

/// Extract the text content of every `Error` element, in document order.
///
/// Returns an empty vector when the body contains no `Error` elements or is
/// not well-formed XML; the delivery path falls back to the raw body then.
#[must_use]
pub fn error_messages(body: &str) -> Vec<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut errors = Vec::new();
    let mut in_error = false;
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"Error" => {
                in_error = true;
                current.clear();
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"Error" => {
                in_error = false;
                errors.push(std::mem::take(&mut current));
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"Error" => {
                errors.push(String::new());
            }
            Ok(Event::Text(e)) if in_error => {
                if let Ok(text) = e.unescape() {
                    current.push_str(&text);
                }
            }
            Ok(Event::CData(e)) if in_error => {
                current.push_str(&String::from_utf8_lossy(&e));
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
    }

    errors
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), SerializeError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(SerializeError::new)
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), SerializeError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(SerializeError::new)
}

fn text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SerializeError> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(SerializeError::new)?;
    end(writer, name)
}

fn object_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    fields: &Map<String, Value>,
) -> Result<(), SerializeError> {
    start(writer, name)?;
    for (key, value) in fields {
        value_element(writer, &pascal_case(key), value)?;
    }
    end(writer, name)
}

fn value_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &Value,
) -> Result<(), SerializeError> {
    match value {
        Value::String(text) => text_element(writer, name, text),
        Value::Bool(flag) => text_element(writer, name, if *flag { "true" } else { "false" }),
        Value::Number(number) => text_element(writer, name, &number.to_string()),
        Value::Null => {
            start(writer, name)?;
            end(writer, name)
        }
        // Sequences render as repeated elements of the same name.
        Value::Array(items) => {
            for item in items {
                value_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(fields) => object_element(writer, name, fields),
    }
}

fn pascal_case(key: &str) -> String {
    key.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect()
}
