use crate::error::{MatcherError, Result};
use crate::types::PortNumber;

/// Parse a decimal port literal, e.g. "443".
///
/// The error keeps the original literal and a short cause.
pub fn parse_port(literal: &str) -> Result<PortNumber> {
    let invalid = |detail: String| MatcherError::InvalidPort {
        value: literal.to_string(),
        detail,
    };

    let value: i64 = literal.parse().map_err(|e| invalid(format!("{}", e)))?;
    if value < 0 {
        return Err(invalid("port must not be negative".to_string()));
    }

    PortNumber::try_from(value)
        .map_err(|_| invalid(format!("port must not exceed {}", PortNumber::MAX)))
}
