//! Queue resource client
//!
//! High-level operations against a single message-queue resource, written
//! against the [`QueueApi`] boundary trait. Parameter validation happens
//! here, before any remote call; remote failures propagate unchanged.

use std::collections::BTreeMap;
use std::path::Path;

use crate::batch::{chunks_of, MAX_BATCH_SIZE};
use crate::console_url::queue_console_url;
use crate::error::{Error, Result};
use crate::paginate::drain_pages;
use crate::traits::{
    AttributeScope, BatchEntry, BatchOutcome, QueueApi, QueueSummary, ReceivedMessage, SendReceipt,
};

/// Attribute key holding the approximate message count
const MESSAGE_COUNT_ATTRIBUTE: &str = "ApproximateNumberOfMessages";

/// Receive limits for the non-destructive message peek
const SAMPLE_MAX_MESSAGES: i32 = 10;
const SAMPLE_WAIT_SECONDS: i32 = 2;

/// Result of one bulk-submit chunk call
///
/// Chunk calls are independent: a failed call is recorded here and later
/// chunks are still attempted. Nothing is retried or rolled back, so callers
/// must reconcile partial success from these reports.
#[derive(Debug)]
pub struct ChunkReport {
    /// Zero-based chunk position
    pub index: usize,

    /// Number of entries submitted in this chunk
    pub entries: usize,

    /// Per-entry outcome, or the error if the call itself failed
    pub outcome: Result<BatchOutcome>,
}

/// Summary of a full batch submission
#[derive(Debug)]
pub struct BatchReport {
    /// Total entries submitted across all chunks
    pub total_entries: usize,

    /// One report per chunk call, in submission order
    pub chunks: Vec<ChunkReport>,
}

impl BatchReport {
    /// True when every chunk call succeeded and no entry was rejected
    pub fn fully_successful(&self) -> bool {
        self.chunks
            .iter()
            .all(|c| matches!(&c.outcome, Ok(o) if o.failed.is_empty()))
    }
}

/// Operations against queue resources, borrowing the session's API handle
pub struct QueueClient<'a, A> {
    api: &'a A,
}

impl<'a, A: QueueApi> QueueClient<'a, A> {
    /// Create a client over a borrowed API handle
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// List every queue reachable by the current session's credentials,
    /// draining all pages of the listing
    pub async fn list_queues(&self) -> Result<Vec<QueueSummary>> {
        let urls = drain_pages(|cursor| self.api.list_queues_page(cursor)).await?;
        Ok(urls.into_iter().map(QueueSummary::from_url).collect())
    }

    /// Approximate number of messages in the queue
    pub async fn message_count(&self, queue_url: &str) -> Result<u64> {
        require_queue_url(queue_url)?;

        let attrs = self
            .api
            .queue_attributes(queue_url, AttributeScope::MessageCount)
            .await?;

        let raw = attrs.get(MESSAGE_COUNT_ATTRIBUTE).ok_or_else(|| {
            Error::Remote(format!(
                "response is missing the {MESSAGE_COUNT_ATTRIBUTE} attribute"
            ))
        })?;

        raw.parse::<u64>().map_err(|_| {
            Error::Remote(format!(
                "{MESSAGE_COUNT_ATTRIBUTE} is not a non-negative integer: {raw:?}"
            ))
        })
    }

    /// Full attribute set of the queue, unmodified
    pub async fn attributes(&self, queue_url: &str) -> Result<BTreeMap<String, String>> {
        require_queue_url(queue_url)?;
        self.api
            .queue_attributes(queue_url, AttributeScope::All)
            .await
    }

    /// Delete all messages in the queue
    ///
    /// Irrecoverable; succeeds even when the queue is already empty. The
    /// menu layer is responsible for confirming before calling this.
    pub async fn purge(&self, queue_url: &str) -> Result<()> {
        require_queue_url(queue_url)?;
        tracing::info!(queue_url, "purging queue");
        self.api.purge_queue(queue_url).await
    }

    /// Non-destructive peek at up to 10 messages with a short wait
    ///
    /// Received messages are not deleted or acknowledged. Repeated calls may
    /// return a different subset: the remote side can redeliver, omit
    /// in-flight messages, or sample differently.
    pub async fn receive_sample(&self, queue_url: &str) -> Result<Vec<ReceivedMessage>> {
        require_queue_url(queue_url)?;
        self.api
            .receive_messages(queue_url, SAMPLE_MAX_MESSAGES, SAMPLE_WAIT_SECONDS)
            .await
    }

    /// Submit a single message
    pub async fn send(&self, queue_url: &str, body: &str) -> Result<SendReceipt> {
        require_queue_url(queue_url)?;
        if body.is_empty() {
            return Err(Error::InvalidArgument("message body is empty".into()));
        }
        self.api.send_message(queue_url, body).await
    }

    /// Submit the lines of a file as messages, in bulk calls of at most 10
    ///
    /// Lines are trimmed and blank lines dropped; surviving lines keep their
    /// order and get position-based ids starting at "0". Chunk calls are
    /// issued sequentially and fail independently — every chunk is attempted
    /// regardless of earlier outcomes, and nothing is rolled back (at-least-
    /// once across chunks). The report carries each chunk's result.
    pub async fn send_batch_from_lines(&self, queue_url: &str, path: &Path) -> Result<BatchReport> {
        require_queue_url(queue_url)?;
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let entries: Vec<BatchEntry> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| BatchEntry {
                id: i.to_string(),
                body: line.to_string(),
            })
            .collect();

        let mut chunks = Vec::new();
        for (index, chunk) in chunks_of(&entries, MAX_BATCH_SIZE).enumerate() {
            let outcome = self.api.send_message_batch(queue_url, chunk).await;
            if let Err(e) = &outcome {
                tracing::warn!(queue_url, chunk = index, error = %e, "bulk-submit chunk failed");
            }
            chunks.push(ChunkReport {
                index,
                entries: chunk.len(),
                outcome,
            });
        }

        Ok(BatchReport {
            total_entries: entries.len(),
            chunks,
        })
    }

    /// Deep link to the queue in the provider's web console
    ///
    /// Pure string construction; no remote call is made.
    pub fn console_url(&self, queue_url: &str, region: &str) -> String {
        queue_console_url(queue_url, region)
    }
}

fn require_queue_url(queue_url: &str) -> Result<()> {
    if queue_url.is_empty() {
        return Err(Error::InvalidArgument("queue url is empty".into()));
    }
    Ok(())
}
