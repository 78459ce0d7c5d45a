use thiserror::Error;

/// Classifies matcher errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad slash structure or prefix length
    MalformedCidr,
    /// Address portion is neither IPv4 nor IPv6
    InvalidAddress,
    /// Port is non-numeric, negative or above 65535
    InvalidPort,
    /// Attribute key is not one the compiler knows
    UnknownAttribute,
}

/// Matcher compilation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    #[error("invalid cidr range {0}")]
    InvalidCidr(String),

    #[error("invalid cidr range {literal}: prefix length exceeds {max}")]
    PrefixTooLong { literal: String, max: u8 },

    #[error("invalid ip address {0}")]
    InvalidIp(String),

    #[error("invalid port {value}: {detail}")]
    InvalidPort { value: String, detail: String },

    #[error("unknown attribute {0}")]
    UnknownAttribute(String),

    #[error("attribute {key}: {source}")]
    Attribute {
        key: String,
        #[source]
        source: Box<MatcherError>,
    },
}

impl MatcherError {
    /// Category of this error. Context wrappers report the kind of the error they wrap.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatcherError::InvalidCidr(_) | MatcherError::PrefixTooLong { .. } => {
                ErrorKind::MalformedCidr
            }
            MatcherError::InvalidIp(_) => ErrorKind::InvalidAddress,
            MatcherError::InvalidPort { .. } => ErrorKind::InvalidPort,
            MatcherError::UnknownAttribute(_) => ErrorKind::UnknownAttribute,
            MatcherError::Attribute { source, .. } => source.kind(),
        }
    }

    pub(crate) fn with_attribute(self, key: &str) -> Self {
        MatcherError::Attribute {
            key: key.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
