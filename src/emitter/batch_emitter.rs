//! Batch emitter
//!
//! Turns one closed batch into one immutable object. The object name is
//! derived from the UTC date and the batch's first and last positions, so
//! the range an object covers can be read off its name.

use super::batch::Batch;
use super::blob::{BlobStore, Visibility, TEXT_PLAIN};
use super::errors::{EmitError, EmitResult};
use super::naming;
use super::provider::BlobProvider;
use super::record::Record;
use super::traits::{EmitReceipt, Emitter};
use crate::config::EmitterConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info};

/// Writes batches to a bucket
///
/// Holds no mutable state; share one across shard processors or build one
/// per call.
#[derive(Debug, Clone)]
pub struct BatchEmitter<B = BlobProvider> {
    bucket: String,
    store: Arc<B>,
}

impl BatchEmitter<BlobProvider> {
    pub fn from_config(config: &EmitterConfig) -> Self {
        Self::new(config.bucket.clone(), Arc::new(BlobProvider::from_config(config)))
    }
}

impl<B: BlobStore> BatchEmitter<B> {
    pub fn new(bucket: impl Into<String>, store: Arc<B>) -> Self {
        Self {
            bucket: bucket.into(),
            store,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object name for a batch emitted now
    pub fn derive_object_name(&self, first: &str, last: &str) -> String {
        naming::derive_object_name(first, last)
    }

    /// Write the batch as one private `text/plain` object
    ///
    /// An empty batch still produces an (empty) object, named from whatever
    /// positions the batch carries. Failures are returned, not retried.
    pub async fn emit<R: Record>(&self, batch: &Batch<R>) -> EmitResult<EmitReceipt> {
        self.emit_at(batch, Utc::now()).await
    }

    /// [`BatchEmitter::emit`] with an explicit clock reading for the date segment
    pub async fn emit_at<R: Record>(
        &self,
        batch: &Batch<R>,
        now: DateTime<Utc>,
    ) -> EmitResult<EmitReceipt> {
        let path = naming::object_name_at(
            now,
            batch.first_sequence_number().as_str(),
            batch.last_sequence_number().as_str(),
        );
        let payload = batch.payload();

        if let Err(source) = self
            .store
            .put(&path, payload, TEXT_PLAIN, Visibility::Private)
            .await
        {
            error!(
                bucket = %self.bucket,
                path = %path,
                error = %source,
                "Error occurred while uploading batch"
            );
            return Err(EmitError::BlobWrite { path, source });
        }

        let receipt = EmitReceipt {
            records: batch.num_records(),
            bucket: self.bucket.clone(),
            path,
            scheme: self.store.uri_scheme(),
        };

        info!(
            records = receipt.records,
            destination = %receipt.uri(),
            "Emitted {} records to {}",
            receipt.records,
            receipt.uri()
        );

        Ok(receipt)
    }
}

#[async_trait]
impl<B, R> Emitter<R> for BatchEmitter<B>
where
    B: BlobStore,
    R: Record + Sync,
{
    async fn emit(&self, batch: &Batch<R>) -> EmitResult<EmitReceipt> {
        BatchEmitter::emit(self, batch).await
    }
}
