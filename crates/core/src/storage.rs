//! Storage resource client
//!
//! High-level operations against a single bucket resource, written against
//! the [`StorageApi`] boundary trait. Local validation and filesystem checks
//! happen before any remote call.

use std::fs;
use std::path::{Path, PathBuf};

use crate::console_url::bucket_console_url;
use crate::error::{Error, Result};
use crate::traits::StorageApi;

/// Operations against bucket resources, borrowing the session's API handle
pub struct BucketClient<'a, S> {
    api: &'a S,
}

impl<'a, S: StorageApi> BucketClient<'a, S> {
    /// Create a client over a borrowed API handle
    pub fn new(api: &'a S) -> Self {
        Self { api }
    }

    /// List all bucket names visible to the session
    pub async fn list_buckets(&self) -> Result<Vec<String>> {
        self.api.list_buckets().await
    }

    /// Delete one object
    ///
    /// Both parameters are validated before any remote call; remote failures
    /// propagate unchanged.
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        require_bucket(bucket)?;
        if key.is_empty() {
            return Err(Error::InvalidArgument("object key is empty".into()));
        }

        tracing::info!(bucket, key, "deleting object");
        self.api.delete_object(bucket, key).await
    }

    /// Upload one local file as a single object
    ///
    /// When `key` is omitted the file's base name is used. Returns the key
    /// the object was stored under.
    pub async fn upload_file(
        &self,
        local_path: &Path,
        bucket: &str,
        key: Option<&str>,
    ) -> Result<String> {
        require_bucket(bucket)?;
        if !local_path.exists() {
            return Err(Error::NotFound(local_path.display().to_string()));
        }

        let key = match key {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => local_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "cannot derive an object key from {}",
                        local_path.display()
                    ))
                })?,
        };

        let data = fs::read(local_path)?;
        tracing::debug!(bucket, key, bytes = data.len(), "uploading object");
        self.api.put_object(bucket, &key, data).await?;
        Ok(key)
    }

    /// Upload every regular file under a directory tree
    ///
    /// Each file's key is `prefix` joined with its path relative to
    /// `local_root`, separators normalized to `/`. Every file is uploaded
    /// exactly once; traversal order is not part of the contract. Returns
    /// the uploaded keys.
    pub async fn upload_directory(
        &self,
        local_root: &Path,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<String>> {
        require_bucket(bucket)?;
        if !local_root.is_dir() {
            return Err(Error::NotFound(local_root.display().to_string()));
        }

        let mut uploaded = Vec::new();
        for (file_path, relative) in collect_files(local_root, local_root)? {
            let key = object_key(prefix, &relative);
            self.upload_file(&file_path, bucket, Some(&key)).await?;
            uploaded.push(key);
        }

        tracing::info!(bucket, count = uploaded.len(), "directory upload finished");
        Ok(uploaded)
    }

    /// Deep link to the bucket in the provider's web console
    ///
    /// Pure string construction; no remote call is made.
    pub fn console_url(&self, bucket: &str, region: &str) -> String {
        bucket_console_url(bucket, region)
    }
}

fn require_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() {
        return Err(Error::InvalidArgument("bucket name is empty".into()));
    }
    Ok(())
}

/// Join an optional prefix with a root-relative path, normalizing separators
fn object_key(prefix: &str, relative: &str) -> String {
    let relative = relative.replace('\\', "/");
    if prefix.is_empty() {
        relative
    } else {
        format!("{}/{relative}", prefix.trim_end_matches('/'))
    }
}

/// Recursively collect every regular file under `dir` with its path
/// relative to `base`
fn collect_files(dir: &Path, base: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            files.push((path.clone(), relative.to_string_lossy().into_owned()));
        } else if path.is_dir() {
            files.extend(collect_files(&path, base)?);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockStorageApi;
    use mockall::predicate::eq;
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_buckets_passes_through() {
        let mut api = MockStorageApi::new();
        api.expect_list_buckets()
            .returning(|| Ok(vec!["alpha".into(), "beta".into()]));

        let buckets = BucketClient::new(&api).list_buckets().await.unwrap();
        assert_eq!(buckets, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_delete_object_validates_before_any_remote_call() {
        // No expectations set: any API call would panic the mock.
        let api = MockStorageApi::new();
        let client = BucketClient::new(&api);

        assert!(matches!(
            client.delete_object("", "k").await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.delete_object("b", "").await,
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_object_propagates_remote_failure() {
        let mut api = MockStorageApi::new();
        api.expect_delete_object()
            .with(eq("b"), eq("k"))
            .returning(|_, _| Err(Error::Remote("access denied".into())));

        let err = BucketClient::new(&api)
            .delete_object("b", "k")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Remote(_)));
    }

    #[tokio::test]
    async fn test_upload_file_missing_path_is_not_found() {
        let api = MockStorageApi::new();
        let err = BucketClient::new(&api)
            .upload_file(Path::new("/no/such/file.bin"), "b", None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upload_file_defaults_key_to_base_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, b"x,y\n").unwrap();

        let mut api = MockStorageApi::new();
        api.expect_put_object()
            .withf(|bucket, key, data| bucket == "b" && key == "report.csv" && data == b"x,y\n")
            .returning(|_, _, _| Ok(()));

        let key = BucketClient::new(&api)
            .upload_file(&path, "b", None)
            .await
            .unwrap();
        assert_eq!(key, "report.csv");
    }

    #[tokio::test]
    async fn test_upload_file_honors_explicit_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, b"x").unwrap();

        let mut api = MockStorageApi::new();
        api.expect_put_object()
            .withf(|_, key, _| key == "exports/2026/report.csv")
            .returning(|_, _, _| Ok(()));

        let key = BucketClient::new(&api)
            .upload_file(&path, "b", Some("exports/2026/report.csv"))
            .await
            .unwrap();
        assert_eq!(key, "exports/2026/report.csv");
    }

    #[tokio::test]
    async fn test_upload_directory_rejects_non_directory() {
        let api = MockStorageApi::new();
        let err = BucketClient::new(&api)
            .upload_directory(Path::new("/no/such/dir"), "b", "")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upload_directory_covers_every_file_with_prefixed_keys() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("sub").join("b.txt"), b"b").unwrap();

        let seen = Arc::new(Mutex::new(BTreeSet::new()));
        let keys = Arc::clone(&seen);

        let mut api = MockStorageApi::new();
        api.expect_put_object().times(2).returning(move |_, key, _| {
            keys.lock().unwrap().insert(key.to_string());
            Ok(())
        });

        let uploaded = BucketClient::new(&api)
            .upload_directory(root.path(), "b", "p")
            .await
            .unwrap();

        let expected: BTreeSet<String> = ["p/a.txt", "p/sub/b.txt"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(*seen.lock().unwrap(), expected);
        assert_eq!(uploaded.len(), 2);
    }

    #[tokio::test]
    async fn test_upload_directory_empty_prefix_uses_relative_keys() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("only.txt"), b"1").unwrap();

        let mut api = MockStorageApi::new();
        api.expect_put_object()
            .withf(|_, key, _| key == "only.txt")
            .returning(|_, _, _| Ok(()));

        let uploaded = BucketClient::new(&api)
            .upload_directory(root.path(), "b", "")
            .await
            .unwrap();
        assert_eq!(uploaded, vec!["only.txt"]);
    }

    #[test]
    fn test_object_key_normalizes_separators() {
        assert_eq!(object_key("p", "sub\\b.txt"), "p/sub/b.txt");
        assert_eq!(object_key("p/", "a.txt"), "p/a.txt");
        assert_eq!(object_key("", "a.txt"), "a.txt");
    }

    #[test]
    fn test_console_url_is_deterministic() {
        let api = MockStorageApi::new();
        let url = BucketClient::new(&api).console_url("my-bucket", "eu-west-1");
        assert_eq!(
            url,
            "https://s3.console.aws.amazon.com/s3/buckets/my-bucket?region=eu-west-1&tab=objects"
        );
    }
}
