use std::fmt;

use thiserror::Error;


/// One `host:port` endpoint to wait for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub host: String,
    pub port: String,
}


impl Target {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }
}


impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetStatus {
    #[default]
    Unknown,
    Available,
    Unavailable,
}


impl TargetStatus {
    pub fn is_available(self) -> bool {
        self == TargetStatus::Available
    }
}


impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetStatus::Unknown => "unknown",
            TargetStatus::Available => "available",
            TargetStatus::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}


#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid format for host:port: {pair:?}")]
    InvalidPair { pair: String },
}


/// Parses a comma separated list of `host:port` pairs, keeping input order.
pub fn parse_targets(input: &str) -> Result<Vec<Target>, ParseError> {
    input.split(',').map(parse_pair).collect()
}


fn parse_pair(pair: &str) -> Result<Target, ParseError> {
    let pair = pair.trim();
    let mut parts = pair.split(':');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(port), None) if !host.is_empty() && !port.is_empty() => {
            Ok(Target::new(host, port))
        }
        _ => Err(ParseError::InvalidPair {
            pair: pair.to_owned(),
        }),
    }
}
