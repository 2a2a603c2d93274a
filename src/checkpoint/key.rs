use std::fmt;

/// Literal tag separating the application from the stream in durable keys
pub const CHECKPOINT_TAG: &str = "checkpoint";

/// Separator between durable key segments
pub const KEY_SEPARATOR: char = ':';

/// Identity of one shard's checkpoint
///
/// Renders as `<application>:checkpoint:<stream>:<shard>`. Every process
/// consuming the same stream under the same application name derives the
/// same key, which is what lets a replacement process resume after failover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckpointKey {
    application_name: String,
    stream_name: String,
    shard_id: String,
}

impl CheckpointKey {
    pub fn new(
        application_name: impl Into<String>,
        stream_name: impl Into<String>,
        shard_id: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            stream_name: stream_name.into(),
            shard_id: shard_id.into(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    pub fn shard_id(&self) -> &str {
        &self.shard_id
    }

    /// Key used in the durable key-value store
    pub fn storage_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CheckpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{app}{sep}{tag}{sep}{stream}{sep}{shard}",
            app = self.application_name,
            tag = CHECKPOINT_TAG,
            stream = self.stream_name,
            shard = self.shard_id,
            sep = KEY_SEPARATOR,
        )
    }
}
