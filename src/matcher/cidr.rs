use std::net::IpAddr;

use crate::compile::CompileOptions;
use crate::error::{MatcherError, Result};
use crate::types::AddressRange;

/// Prefix length of a host route for the given address family
pub fn host_prefix_len(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

/// Parse an address or CIDR literal into an `AddressRange`.
///
/// Rejects prefix lengths wider than the address family.
/// Examples: "192.168.0.0/16", "10.0.0.1", "2001:db8::/32"
pub fn parse_cidr(literal: &str) -> Result<AddressRange> {
    parse_cidr_with(literal, &CompileOptions::default())
}

/// Parse an address or CIDR literal using the given options.
pub fn parse_cidr_with(literal: &str, options: &CompileOptions) -> Result<AddressRange> {
    let mut parts = literal.split('/');
    let addr_str = parts.next().unwrap_or_default();
    let prefix_str = parts.next();
    if parts.next().is_some() {
        return Err(MatcherError::InvalidCidr(literal.to_string()));
    }

    // u32 parsing rejects a leading '-' as well as non-digits
    let explicit_len = prefix_str
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| MatcherError::InvalidCidr(literal.to_string()))
        })
        .transpose()?;

    let addr: IpAddr = addr_str
        .parse()
        .map_err(|_| MatcherError::InvalidIp(literal.to_string()))?;

    let max = host_prefix_len(&addr);
    let prefix_len = match explicit_len {
        Some(len) if options.strict_prefix_length && len > u32::from(max) => {
            return Err(MatcherError::PrefixTooLong {
                literal: literal.to_string(),
                max,
            });
        }
        Some(len) => len,
        None => u32::from(max),
    };

    Ok(AddressRange {
        address_prefix: addr.to_string(),
        prefix_len,
    })
}
