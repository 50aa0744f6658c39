//! S3 implementation of the storage API boundary
//!
//! Wraps aws-sdk-s3 and implements the StorageApi trait from awsutil-core.

use async_trait::async_trait;
use aws_config::SdkConfig;

use awsutil_core::{Error, Result, StorageApi};

/// Storage API over aws-sdk-s3
pub struct S3Api {
    inner: aws_sdk_s3::Client,
}

impl S3Api {
    /// Create an adapter borrowing the session configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: aws_sdk_s3::Client::new(config),
        }
    }
}

#[async_trait]
impl StorageApi for S3Api {
    async fn list_buckets(&self) -> Result<Vec<String>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(response
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;
        Ok(())
    }

    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> Result<()> {
        let body = aws_sdk_s3::primitives::ByteStream::from(data);

        self.inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;
        Ok(())
    }
}
