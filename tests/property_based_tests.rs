use chrono::NaiveDate;
use connector_core::checkpoint::{CheckpointKey, CheckpointStore, Position};
use connector_core::emitter::naming::object_name_for_date;
use connector_core::emitter::Batch;
use connector_core::store::MemoryKeyValueStore;
use proptest::prelude::*;
use std::sync::Arc;

fn name_segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,24}"
}

fn sequence_number() -> impl Strategy<Value = String> {
    "[0-9]{1,56}"
}

proptest! {
    /// Property: durable keys always follow application:checkpoint:stream:shard
    #[test]
    fn checkpoint_key_layout(app in name_segment(), stream in name_segment(), shard in name_segment()) {
        let key = CheckpointKey::new(&app, &stream, &shard);
        prop_assert_eq!(key.storage_key(), format!("{}:checkpoint:{}:{}", app, stream, shard));
    }

    /// Property: object names recover the batch's position range
    #[test]
    fn object_name_encodes_range(
        first in sequence_number(),
        last in sequence_number(),
        day in 0u32..3650,
    ) {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(u64::from(day));
        let name = object_name_for_date(date, &first, &last);

        let expected_suffix = format!("/{}-{}.txt", first, last);
        prop_assert!(name.ends_with(&expected_suffix));
        prop_assert_eq!(&name[1..11], date.format("%Y-%m-%d").to_string());
    }

    /// Property: the payload is the plain concatenation of the records
    #[test]
    fn payload_is_concatenation(records in proptest::collection::vec("[ -~]{0,16}", 0..20)) {
        let expected: String = records.concat();
        let batch = Batch::new(records, "1", "2");
        prop_assert_eq!(batch.payload(), expected.into_bytes());
    }

    /// Property: the last write to each shard is what a fresh instance recovers
    #[test]
    fn last_write_is_recovered(writes in proptest::collection::vec((0usize..4, sequence_number()), 1..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let backend = MemoryKeyValueStore::new();
            let store = CheckpointStore::new("app", "stream1", Arc::new(backend.clone()));

            let mut expected = std::collections::HashMap::new();
            for (shard, seq) in &writes {
                let shard_id = format!("shardId-{shard}");
                store.write(&shard_id, seq.as_str()).await;
                assert_eq!(store.read(&shard_id), Position::from(seq.as_str()));
                expected.insert(shard_id, seq.clone());
            }

            let fresh = CheckpointStore::new("app", "stream1", Arc::new(backend));
            for (shard_id, seq) in &expected {
                assert!(fresh.exists(shard_id).await);
                assert_eq!(fresh.read(shard_id), Position::from(seq.as_str()));
            }
        });
    }
}
