use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKey;
use crate::error::Result;
use crate::matcher::{
    compile_header_matcher, is_wildcard_pattern, parse_cidr_with, parse_port, string_match,
    Matcher,
};
use crate::types::HeaderMatchRule;

/// Header carrying the HTTP method
pub const METHOD_HEADER: &str = ":method";

/// Header carrying the request path
pub const PATH_HEADER: &str = ":path";

/// Compilation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject prefix lengths wider than the address family (e.g. `/33` on IPv4)
    pub strict_prefix_length: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strict_prefix_length: true,
        }
    }
}

impl CompileOptions {
    /// Create new compile options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether oversized prefix lengths are rejected.
    pub fn with_strict_prefix_length(mut self, strict: bool) -> Self {
        self.strict_prefix_length = strict;
        self
    }
}

/// All matchers compiled for one attribute; any of them may match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledAttribute {
    /// Attribute key as written in the policy
    pub key: String,
    pub matchers: Vec<Matcher>,
}

/// Compile every value of a policy attribute.
///
/// Fails on the first invalid value, with the attribute key as context.
pub fn compile_attribute<S: AsRef<str>>(
    key: &str,
    values: &[S],
    options: &CompileOptions,
) -> Result<CompiledAttribute> {
    let attribute = AttributeKey::parse(key)?;

    let matchers = values
        .iter()
        .map(|value| compile_value(&attribute, value.as_ref(), options))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.with_attribute(key))?;

    tracing::debug!(
        attribute = %attribute,
        count = matchers.len(),
        "compiled attribute matchers"
    );

    Ok(CompiledAttribute {
        key: key.to_string(),
        matchers,
    })
}

/// Compile a single attribute value
fn compile_value(attribute: &AttributeKey, value: &str, options: &CompileOptions) -> Result<Matcher> {
    match attribute {
        AttributeKey::SourceIp | AttributeKey::DestinationIp => {
            parse_cidr_with(value, options).map(Matcher::Address)
        }
        AttributeKey::DestinationPort => parse_port(value).map(Matcher::Port),
        AttributeKey::RequestHeader(name) => Ok(Matcher::Header(header_rule(name, value))),
    }
}

fn header_rule(name: &str, value: &str) -> HeaderMatchRule {
    tracing::trace!(
        header = name,
        wildcard = is_wildcard_pattern(value),
        "compiling header pattern"
    );
    compile_header_matcher(name, value)
}

/// Compile HTTP methods into `:method` header matchers
pub fn compile_methods<S: AsRef<str>>(methods: &[S]) -> Vec<HeaderMatchRule> {
    methods
        .iter()
        .map(|m| header_rule(METHOD_HEADER, m.as_ref()))
        .collect()
}

/// Compile request paths into `:path` header matchers
pub fn compile_paths<S: AsRef<str>>(paths: &[S]) -> Vec<HeaderMatchRule> {
    paths
        .iter()
        .map(|p| header_rule(PATH_HEADER, p.as_ref()))
        .collect()
}

/// Check whether a service host name is selected by a list of service patterns
pub fn service_matches<S: AsRef<str>>(service: &str, services: &[S]) -> bool {
    string_match(service, services)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MatcherError};
    use crate::types::AddressRange;

    #[test]
    fn test_compile_address_attribute() {
        let compiled =
            compile_attribute("source.ip", &["10.0.0.0/8", "::1"], &CompileOptions::new())
                .unwrap();
        assert_eq!(compiled.key, "source.ip");
        assert_eq!(
            compiled.matchers,
            vec![
                Matcher::Address(AddressRange {
                    address_prefix: "10.0.0.0".into(),
                    prefix_len: 8,
                }),
                Matcher::Address(AddressRange {
                    address_prefix: "::1".into(),
                    prefix_len: 128,
                }),
            ]
        );
    }

    #[test]
    fn test_compile_port_attribute() {
        let compiled =
            compile_attribute("destination.port", &["80", "443"], &CompileOptions::new())
                .unwrap();
        assert_eq!(compiled.matchers, vec![Matcher::Port(80), Matcher::Port(443)]);
    }

    #[test]
    fn test_compile_header_attribute() {
        let compiled = compile_attribute(
            "request.headers[x-user]",
            &["alice", "*bob*"],
            &CompileOptions::new(),
        )
        .unwrap();
        assert_eq!(
            compiled.matchers,
            vec![
                Matcher::Header(HeaderMatchRule::exact("x-user", "alice")),
                Matcher::Header(HeaderMatchRule::regex("x-user", "^.*bob.*$")),
            ]
        );
    }

    #[test]
    fn test_first_invalid_value_fails() {
        let err = compile_attribute("destination.port", &["80", "xyz"], &CompileOptions::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPort);
        assert!(err
            .to_string()
            .starts_with("attribute destination.port: invalid port xyz:"));
    }

    #[test]
    fn test_unknown_attribute() {
        let err =
            compile_attribute("source.namespace", &["default"], &CompileOptions::new()).unwrap_err();
        assert_eq!(err, MatcherError::UnknownAttribute("source.namespace".into()));
    }

    #[test]
    fn test_options_forwarded_to_cidr_parser() {
        let values = ["10.0.0.0/40"];
        assert!(compile_attribute("destination.ip", &values, &CompileOptions::new()).is_err());

        let lenient = CompileOptions::new().with_strict_prefix_length(false);
        let compiled = compile_attribute("destination.ip", &values, &lenient).unwrap();
        assert_eq!(compiled.matchers.len(), 1);
    }

    #[test]
    fn test_compile_methods_and_paths() {
        let methods = compile_methods(&["GET", "POST"]);
        assert_eq!(methods[0], HeaderMatchRule::exact(":method", "GET"));
        assert_eq!(methods.len(), 2);

        let paths = compile_paths(&["/productpage", "*/reviews*"]);
        assert_eq!(paths[0], HeaderMatchRule::exact(":path", "/productpage"));
        assert_eq!(paths[1], HeaderMatchRule::regex(":path", "^.*/reviews.*$"));
    }

    #[test]
    fn test_service_matches() {
        let services = ["reviews.default.svc.cluster.local", "*.prod.svc.cluster.local"];
        assert!(service_matches("reviews.default.svc.cluster.local", &services));
        assert!(service_matches("ratings.prod.svc.cluster.local", &services));
        assert!(!service_matches("ratings.default.svc.cluster.local", &services));
    }

    #[test]
    fn test_default_options_are_strict() {
        assert!(CompileOptions::default().strict_prefix_length);
        assert!(!CompileOptions::new()
            .with_strict_prefix_length(false)
            .strict_prefix_length);
    }
}
