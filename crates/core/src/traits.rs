//! Remote API boundary traits
//!
//! These traits define the contract this tool requires of the remote
//! queuing/storage service. The resource clients are written against them,
//! the SDK adapter crate implements them, and tests mock them — so the
//! clients are exercised without any live or mocked network stack.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::paginate::Page;

/// A queue identifier together with its derived short name
/// (the last `/` segment of the URL, used for console links only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSummary {
    /// Full queue URL, the lookup key for all operations
    pub url: String,

    /// Human-facing short name
    pub name: String,
}

impl QueueSummary {
    /// Build a summary from a queue URL, deriving the short name
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = short_name(&url).to_string();
        Self { url, name }
    }
}

/// Last `/` segment of a queue identifier
pub fn short_name(queue_url: &str) -> &str {
    queue_url.rsplit('/').next().unwrap_or(queue_url)
}

/// A message returned by a receive call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Remote-assigned message id
    pub message_id: String,

    /// Message body text
    pub body: String,
}

/// Receipt for a single successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Remote-assigned message id
    pub message_id: String,
}

/// One entry of a bulk-submit call: position-based id plus body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// Id unique within one bulk call, assigned by position
    pub id: String,

    /// Message body text
    pub body: String,
}

/// Per-entry result of one bulk-submit call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Ids the remote API accepted
    pub successful: Vec<String>,

    /// Entries the remote API rejected
    pub failed: Vec<BatchFailure>,
}

/// A rejected bulk-submit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Entry id as submitted
    pub id: String,

    /// Remote-reported reason
    pub reason: String,
}

/// Which attributes to fetch from a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
    /// The "all attributes" sentinel
    All,

    /// Only the approximate-message-count attribute
    MessageCount,
}

/// Queue operations the remote API must provide
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueApi: Send + Sync {
    /// Fetch one page of queue URLs, resuming from `cursor` if given
    async fn list_queues_page(&self, cursor: Option<String>) -> Result<Page<String>>;

    /// Fetch queue attributes as a key/value mapping
    async fn queue_attributes(
        &self,
        queue_url: &str,
        scope: AttributeScope,
    ) -> Result<BTreeMap<String, String>>;

    /// Delete all messages in the queue (irrecoverable)
    async fn purge_queue(&self, queue_url: &str) -> Result<()>;

    /// Receive up to `max_messages` messages, waiting at most `wait_seconds`
    async fn receive_messages(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_seconds: i32,
    ) -> Result<Vec<ReceivedMessage>>;

    /// Submit a single message
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<SendReceipt>;

    /// Submit one bulk call of at most [`crate::batch::MAX_BATCH_SIZE`] entries
    async fn send_message_batch(
        &self,
        queue_url: &str,
        entries: &[BatchEntry],
    ) -> Result<BatchOutcome>;
}

/// Object-storage operations the remote API must provide
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageApi: Send + Sync {
    /// List all bucket names visible to the session
    async fn list_buckets(&self) -> Result<Vec<String>>;

    /// Delete one object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Upload `data` as one object
    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_takes_last_segment() {
        assert_eq!(
            short_name("https://sqs.us-east-1.amazonaws.com/123456789/test-queue"),
            "test-queue"
        );
        assert_eq!(short_name("plain-name"), "plain-name");
    }

    #[test]
    fn test_queue_summary_from_url() {
        let summary = QueueSummary::from_url("https://sqs.eu-west-1.amazonaws.com/42/jobs");
        assert_eq!(summary.name, "jobs");
        assert!(summary.url.ends_with("/jobs"));
    }
}
