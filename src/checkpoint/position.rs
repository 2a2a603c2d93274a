use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stream-assigned sequence token for one record in a shard
///
/// Positions are compared only for equality and passed through untouched.
/// Their natural order belongs to the stream (Kinesis sequence numbers are
/// variable-length decimal strings), so no `Ord` is provided here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The empty position, returned for shards with no known checkpoint
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for Position {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl AsRef<str> for Position {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Position::default().is_empty());
        assert_eq!(Position::empty().as_str(), "");
    }

    #[test]
    fn test_display_passes_value_through() {
        let p = Position::from("49590338271490256608559692538361571095921575989136588898");
        assert_eq!(
            p.to_string(),
            "49590338271490256608559692538361571095921575989136588898"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let p = Position::new("205");
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""205""#);
    }
}
