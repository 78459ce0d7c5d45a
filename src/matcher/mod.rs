mod cidr;
mod header;
pub(crate) mod list;
mod port;

pub use cidr::{host_prefix_len, parse_cidr, parse_cidr_with};
pub use header::{compile_header_matcher, is_wildcard_pattern};
pub use list::{glob_match, string_match, GlobMode};
pub use port::parse_port;

use serde::{Deserialize, Serialize};

use crate::types::{AddressRange, HeaderMatchRule, PortNumber};

/// Enum wrapper for all compiled matcher values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    Address(AddressRange),
    Port(PortNumber),
    Header(HeaderMatchRule),
}
