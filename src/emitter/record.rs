use super::errors::{EmitError, EmitResult};
use serde::Serialize;
use std::borrow::Cow;

/// A record that can be written into a batch object
///
/// The emitter concatenates each record's text with nothing in between, so a
/// record that needs a delimiter (a trailing newline, say) must carry it.
pub trait Record {
    fn to_text(&self) -> Cow<'_, str>;
}

impl Record for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Record for &str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl Record for Cow<'_, str> {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

/// One JSON document followed by a newline
///
/// Serialized up front so a value that cannot be encoded is rejected when
/// the batch is assembled, not halfway through an emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRecord {
    line: String,
}

impl JsonRecord {
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> EmitResult<Self> {
        let mut line =
            serde_json::to_string(value).map_err(|e| EmitError::Serialization(e.to_string()))?;
        line.push('\n');
        Ok(Self { line })
    }
}

impl Record for JsonRecord {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.line)
    }
}
