use std::fmt;
use std::net::IpAddr;

use ipnet::IpNet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matcher::list;

/// Validated TCP/UDP port
pub type PortNumber = u16;

/// Validated network prefix in the shape the proxy schema expects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRange {
    /// Canonical textual IPv4/IPv6 address
    pub address_prefix: String,
    /// Prefix length, defaulted to the full family width when absent
    pub prefix_len: u32,
}

impl AddressRange {
    /// Convert into an `IpNet`. Fails when the prefix length is wider than the
    /// address family, which only happens for ranges parsed without the bound check.
    pub fn to_ipnet(&self) -> Option<IpNet> {
        let addr: IpAddr = self.address_prefix.parse().ok()?;
        let len = u8::try_from(self.prefix_len).ok()?;
        IpNet::new(addr, len).ok()
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address_prefix, self.prefix_len)
    }
}

/// How a header value is compared
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMatchSpecifier {
    /// Byte-wise equality
    ExactMatch(String),
    /// Anchored, escaped regular expression
    RegexMatch(String),
}

/// Header matcher bound to a header name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderMatchRule {
    pub name: String,
    #[serde(flatten)]
    pub specifier: HeaderMatchSpecifier,
}

impl HeaderMatchRule {
    pub fn exact(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifier: HeaderMatchSpecifier::ExactMatch(value.into()),
        }
    }

    pub fn regex(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifier: HeaderMatchSpecifier::RegexMatch(pattern.into()),
        }
    }

    /// Evaluate the rule against a concrete header value.
    ///
    /// Regex rules are produced escaped and anchored, so compilation only fails
    /// for hand-built rules; those never match.
    pub fn matches(&self, value: &str) -> bool {
        match &self.specifier {
            HeaderMatchSpecifier::ExactMatch(exact) => exact == value,
            HeaderMatchSpecifier::RegexMatch(pattern) => {
                Regex::new(pattern).is_ok_and(|re| re.is_match(value))
            }
        }
    }
}

/// Ordered set of glob patterns, matched as a logical OR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMatchRule {
    patterns: Vec<String>,
}

impl ListMatchRule {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether any pattern accepts the candidate
    pub fn matches(&self, candidate: &str) -> bool {
        list::string_match(candidate, &self.patterns)
    }
}
