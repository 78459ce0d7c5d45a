//! Authz Matcher - compiles textual authorization policy attributes into
//! structured proxy matchers
//!
//! This library resolves loosely formatted operator input into the strict
//! forms an access-control enforcement layer consumes:
//! - Glob list membership (exact, `*`, prefix `foo*`, suffix `*foo`)
//! - Address and CIDR literals into address prefix + prefix length
//! - Port literals into validated `u16` ports
//! - Header value patterns into exact or anchored regex matchers
//!
//! Every operation is a pure, one-shot transform. Errors are returned as
//! values and keep the offending literal.
//!
//! # Example
//!
//! ```rust
//! use authz_matcher::{compile_header_matcher, parse_cidr, parse_port, string_match};
//! use authz_matcher::HeaderMatchSpecifier;
//!
//! assert!(string_match("product page", &["review page", "product*"]));
//!
//! let range = parse_cidr("192.168.0.0/16").unwrap();
//! assert_eq!(range.address_prefix, "192.168.0.0");
//! assert_eq!(range.prefix_len, 16);
//!
//! assert_eq!(parse_port("443").unwrap(), 443);
//!
//! let rule = compile_header_matcher(":path", "*/productpage*");
//! assert_eq!(
//!     rule.specifier,
//!     HeaderMatchSpecifier::RegexMatch("^.*/productpage.*$".to_string())
//! );
//! ```
//!
//! # Attribute Keys
//!
//! | Key | Values | Compiled as |
//! |-----|--------|-------------|
//! | `source.ip` | `10.0.0.0/8`, `::1` | address range |
//! | `destination.ip` | `192.168.1.1` | address range |
//! | `destination.port` | `443` | port |
//! | `request.headers[<name>]` | `/api`, `*admin*` | header matcher |

pub mod attribute;
pub mod compile;
pub mod error;
pub mod matcher;
pub mod types;

// Re-export commonly used items
pub use attribute::AttributeKey;
pub use compile::{
    compile_attribute, compile_methods, compile_paths, service_matches, CompileOptions,
    CompiledAttribute, METHOD_HEADER, PATH_HEADER,
};
pub use error::{ErrorKind, MatcherError, Result};
pub use matcher::{
    compile_header_matcher, glob_match, host_prefix_len, is_wildcard_pattern, parse_cidr,
    parse_cidr_with, parse_port, string_match, GlobMode, Matcher,
};
pub use types::{AddressRange, HeaderMatchRule, HeaderMatchSpecifier, ListMatchRule, PortNumber};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let options = CompileOptions::new();

        let sources = compile_attribute("source.ip", &["10.0.0.0/8"], &options).unwrap();
        let ports = compile_attribute("destination.port", &["443"], &options).unwrap();
        let paths = compile_paths(&["*/productpage*"]);
        let methods = compile_methods(&["GET"]);

        assert_eq!(sources.matchers.len(), 1);
        assert_eq!(ports.matchers, vec![Matcher::Port(443)]);
        assert!(paths[0].matches("/api/productpage"));
        assert!(methods[0].matches("GET"));
        assert!(!methods[0].matches("get"));

        assert!(service_matches(
            "productpage.default.svc.cluster.local",
            &["*.default.svc.cluster.local"]
        ));
    }
}
