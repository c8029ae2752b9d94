//! XML codec for the gateway wire format.
//!
//! Requests and responses go through [`serde_json::Value`] so that the typed models only
//! need plain `serde` derives. The gateway annotates scalar elements with a `type`
//! attribute (`array`, `boolean`, `integer`, `datetime`, ...) and marks missing values
//! with `nil="true"`; both are handled here.

use crate::Error;
use quick_xml::{
    escape::escape,
    events::{BytesStart, Event},
    Reader,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

static XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Serializes `value` as an XML document rooted at `root`.
///
/// Field names are dasherized, `null` fields are omitted and array items are
/// emitted as `<item>` elements.
pub fn to_xml<T: Serialize + ?Sized>(root: &str, value: &T) -> Result<String, Error> {
    let value = serde_json::to_value(value)?;

    let mut out = String::from(XML_DECLARATION);
    write_element(&mut out, root, &value);
    Ok(out)
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    let tag = dasherize(name);
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            out.push_str(&format!(r#"<{tag} type="boolean">{b}</{tag}>"#));
        }
        Value::Number(n) if n.is_i64() || n.is_u64() => {
            out.push_str(&format!(r#"<{tag} type="integer">{n}</{tag}>"#));
        }
        Value::Number(n) => {
            out.push_str(&format!("<{tag}>{n}</{tag}>"));
        }
        Value::String(s) => {
            out.push_str(&format!("<{tag}>{}</{tag}>", escape(s.as_str())));
        }
        Value::Array(items) => {
            out.push_str(&format!(r#"<{tag} type="array">"#));
            for item in items {
                write_element(out, "item", item);
            }
            out.push_str(&format!("</{tag}>"));
        }
        Value::Object(fields) => {
            out.push_str(&format!("<{tag}>"));
            for (key, field) in fields {
                write_element(out, key, field);
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

/// Parses an XML document.
///
/// Returns the name of the root element (with dashes replaced by underscores) together
/// with its content converted to a [`Value`]. An empty body yields an empty root name
/// and [`Value::Null`].
pub fn from_xml(body: &str) -> Result<(String, Value), Error> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Frame::open(&e)?),
            Event::Empty(e) => {
                let frame = Frame::open(&e)?;
                close(frame, &mut stack, &mut root);
            }
            Event::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| Error::Decode("Unbalanced closing tag".to_string()))?;
                close(frame, &mut stack, &mut root);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::Decode("Unexpected end of document".to_string()));
    }

    Ok(root.unwrap_or_else(|| (String::new(), Value::Null)))
}

/// An element being parsed.
struct Frame {
    name: String,
    kind: Option<String>,
    nil: bool,
    text: String,
    children: Vec<(String, Value)>,
}

impl Frame {
    fn open(e: &BytesStart<'_>) -> Result<Self, Error> {
        let mut frame = Frame {
            name: underscore(&String::from_utf8_lossy(e.name().as_ref())),
            kind: None,
            nil: false,
            text: String::new(),
            children: Vec::new(),
        };

        for attr in e.attributes() {
            let attr = attr.map_err(|e| Error::Decode(e.to_string()))?;
            let value = attr.unescape_value()?;
            match attr.key.as_ref() {
                b"type" => frame.kind = Some(value.into_owned()),
                b"nil" => frame.nil = value == "true",
                _ => {}
            }
        }

        Ok(frame)
    }

    /// Converts the element into a value. `None` means the element carries no value.
    fn into_value(self) -> Option<Value> {
        if self.nil {
            return None;
        }

        match self.kind.as_deref() {
            Some("array") => Some(Value::Array(
                self.children.into_iter().map(|(_, v)| v).collect(),
            )),
            Some("boolean") => Some(Value::Bool(self.text.trim() == "true")),
            Some("integer") => match self.text.trim().parse::<i64>() {
                Ok(n) => Some(Value::from(n)),
                Err(_) if self.text.is_empty() => None,
                Err(_) => Some(Value::String(self.text)),
            },
            _ if !self.children.is_empty() => {
                let mut fields = Map::new();
                for (key, value) in self.children {
                    match fields.get_mut(&key) {
                        // Repeated siblings are collected into an array
                        Some(Value::Array(existing)) => existing.push(value),
                        Some(existing) => {
                            let first = existing.take();
                            *existing = Value::Array(vec![first, value]);
                        }
                        None => {
                            fields.insert(key, value);
                        }
                    }
                }
                Some(Value::Object(fields))
            }
            _ if !self.text.is_empty() => Some(Value::String(self.text)),
            _ => None,
        }
    }
}

fn close(frame: Frame, stack: &mut [Frame], root: &mut Option<(String, Value)>) {
    let name = frame.name.clone();
    let parent_is_array = stack
        .last()
        .map_or(false, |parent| parent.kind.as_deref() == Some("array"));

    let value = match frame.into_value() {
        Some(value) => value,
        // Array items are kept even when empty so that positions are preserved
        None if parent_is_array => Value::Object(Map::new()),
        None if stack.is_empty() => Value::Null,
        None => return,
    };

    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None => *root = Some((name, value)),
    }
}

/// Deserializes an element that appears once or repeatedly under a collection.
///
/// A single child is decoded as an object, repeated children as an array.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        Value::Null => Ok(Vec::new()),
        single => Ok(vec![
            serde_json::from_value(single).map_err(serde::de::Error::custom)?
        ]),
    }
}

fn dasherize(name: &str) -> String {
    name.replace('_', "-")
}

fn underscore(name: &str) -> String {
    name.replace('-', "_")
}
