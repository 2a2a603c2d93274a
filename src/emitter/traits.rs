use super::batch::Batch;
use super::errors::EmitResult;
use super::record::Record;
use async_trait::async_trait;

/// Where a successfully emitted batch ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReceipt {
    /// Number of records written
    pub records: usize,
    pub bucket: String,
    /// Object name within the bucket, e.g. `/2024-03-11/100-205.txt`
    pub path: String,
    /// Scheme of the backend, used to render [`EmitReceipt::uri`]
    pub scheme: &'static str,
}

impl EmitReceipt {
    /// Full location, e.g. `s3://bucket/2024-03-11/100-205.txt`
    pub fn uri(&self) -> String {
        format!("{}://{}{}", self.scheme, self.bucket, self.path)
    }
}

/// Sink for closed batches
///
/// Invoked by the shard processor once per full buffer.
#[async_trait]
pub trait Emitter<R: Record + Sync>: Send + Sync {
    async fn emit(&self, batch: &Batch<R>) -> EmitResult<EmitReceipt>;
}
