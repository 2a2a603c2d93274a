//! Filesystem blob provider
//!
//! Maps a bucket onto a directory: object `/2024-03-11/100-205.txt` in bucket
//! `archive` lands at `<root>/archive/2024-03-11/100-205.txt`. Objects are
//! written to a temporary sibling, flushed to disk and renamed into place,
//! so readers never observe a partial file. The parent directory is synced
//! after the rename so the new entry survives a crash.

use crate::emitter::blob::{BlobError, BlobResult, BlobStore, Visibility};
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tracing::debug;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct FileSystemBlobStore {
    bucket_dir: PathBuf,
}

impl FileSystemBlobStore {
    pub fn new(root_dir: impl AsRef<Path>, bucket: &str) -> Self {
        Self {
            bucket_dir: root_dir.as_ref().join(bucket),
        }
    }

    pub fn bucket_dir(&self) -> &Path {
        &self.bucket_dir
    }

    /// Local file backing an object path
    pub fn object_path(&self, path: &str) -> BlobResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));

        let mut resolved = self.bucket_dir.clone();
        let mut segments = 0;
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    resolved.push(segment);
                    segments += 1;
                }
                _ => return Err(BlobError::InvalidPath(path.to_string())),
            }
        }

        if segments == 0 {
            return Err(BlobError::InvalidPath(path.to_string()));
        }
        Ok(resolved)
    }
}

impl BlobStore for FileSystemBlobStore {
    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        _content_type: &str,
        visibility: Visibility,
    ) -> BlobResult<()> {
        let target = self.object_path(path)?;
        let parent = target
            .parent()
            .ok_or_else(|| BlobError::InvalidPath(path.to_string()))?;
        tokio::fs::create_dir_all(parent).await?;

        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| BlobError::InvalidPath(path.to_string()))?;
        let temp = parent.join(format!(
            ".{}.{}-{}.tmp",
            file_name,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let bytes = body.len();
        let committed = match write_synced(&temp, &body).await {
            Ok(()) => tokio::fs::rename(&temp, &target).await,
            Err(e) => Err(e),
        };
        if let Err(e) = committed {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }
        sync_dir(parent).await?;

        debug!(
            path = path,
            file = %target.display(),
            bytes = bytes,
            visibility = %visibility,
            "Blob PUT (filesystem)"
        );
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "filesystem"
    }

    fn uri_scheme(&self) -> &'static str {
        "file"
    }
}

/// Write `body` to a fresh file and flush it to stable storage
async fn write_synced(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(body).await?;
    file.sync_all().await
}

/// Flush directory metadata so a rename into it is durable
///
/// Windows cannot open directories for syncing; there the call is a no-op.
async fn sync_dir(path: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let dir = tokio::fs::File::open(path).await?;
        dir.sync_all().await?;
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_writes_file_under_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemBlobStore::new(dir.path(), "archive");

        store
            .put("/2024-03-11/100-205.txt", b"abc".to_vec(), "text/plain", Visibility::Private)
            .await
            .unwrap();

        let written = std::fs::read(dir.path().join("archive/2024-03-11/100-205.txt")).unwrap();
        assert_eq!(written, b"abc");
    }

    #[tokio::test]
    async fn test_put_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemBlobStore::new(dir.path(), "archive");
        store
            .put("/2024-03-11/1-2.txt", Vec::new(), "text/plain", Visibility::Private)
            .await
            .unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path().join("archive/2024-03-11"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("1-2.txt")]);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemBlobStore::new(dir.path(), "archive");
        for body in [b"first".to_vec(), b"second".to_vec()] {
            store
                .put("/2024-03-11/1-2.txt", body, "text/plain", Visibility::Private)
                .await
                .unwrap();
        }

        let written = std::fs::read(dir.path().join("archive/2024-03-11/1-2.txt")).unwrap();
        assert_eq!(written, b"second");
    }

    #[tokio::test]
    async fn test_failed_put_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemBlobStore::new(dir.path(), "archive");

        // A non-empty directory where the object should go blocks the rename
        let blocker = dir.path().join("archive/2024-03-11/1-2.txt");
        std::fs::create_dir_all(blocker.join("occupied")).unwrap();

        let result = store
            .put("/2024-03-11/1-2.txt", b"abc".to_vec(), "text/plain", Visibility::Private)
            .await;
        assert!(matches!(result, Err(BlobError::Io(_))));

        let entries: Vec<_> = std::fs::read_dir(dir.path().join("archive/2024-03-11"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("1-2.txt")]);
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let store = FileSystemBlobStore::new("/tmp/root", "archive");
        assert!(matches!(
            store.object_path("/../escape.txt"),
            Err(BlobError::InvalidPath(_))
        ));
        assert!(matches!(store.object_path("/"), Err(BlobError::InvalidPath(_))));
    }

    #[test]
    fn test_object_path_strips_leading_slash() {
        let store = FileSystemBlobStore::new("/tmp/root", "archive");
        assert_eq!(
            store.object_path("/2024-03-11/1-3.txt").unwrap(),
            PathBuf::from("/tmp/root/archive/2024-03-11/1-3.txt")
        );
    }
}
