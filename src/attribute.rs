//! Policy attribute keys.
//!
//! Maps the attribute names used in authorization constraints and properties
//! onto the matcher that compiles their values.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MatcherError, Result};

/// Format: request.headers[<name>]
static HEADER_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^request\.headers\[([^\[\]]+)\]$")
        .expect("HEADER_KEY_PATTERN: hardcoded regex is invalid")
});

/// Attribute key understood by the compiler
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    SourceIp,
    DestinationIp,
    DestinationPort,
    /// Request header, by name
    RequestHeader(String),
}

impl AttributeKey {
    pub fn parse(key: &str) -> Result<Self> {
        match key {
            "source.ip" => Ok(AttributeKey::SourceIp),
            "destination.ip" => Ok(AttributeKey::DestinationIp),
            "destination.port" => Ok(AttributeKey::DestinationPort),
            _ => HEADER_KEY_PATTERN
                .captures(key)
                .and_then(|c| c.get(1))
                .map(|name| AttributeKey::RequestHeader(name.as_str().to_string()))
                .ok_or_else(|| MatcherError::UnknownAttribute(key.to_string())),
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKey::SourceIp => f.write_str("source.ip"),
            AttributeKey::DestinationIp => f.write_str("destination.ip"),
            AttributeKey::DestinationPort => f.write_str("destination.port"),
            AttributeKey::RequestHeader(name) => write!(f, "request.headers[{}]", name),
        }
    }
}
