//! SQS implementation of the queue API boundary
//!
//! Wraps aws-sdk-sqs and implements the QueueApi trait from awsutil-core.
//! Remote faults are mapped to `Error::Remote`; no retries happen here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::types::{QueueAttributeName, SendMessageBatchRequestEntry};

use awsutil_core::{
    AttributeScope, BatchEntry, BatchFailure, BatchOutcome, Error, Page, QueueApi,
    ReceivedMessage, Result, SendReceipt,
};

/// Queue API over aws-sdk-sqs
pub struct SqsApi {
    inner: aws_sdk_sqs::Client,
}

impl SqsApi {
    /// Create an adapter borrowing the session configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: aws_sdk_sqs::Client::new(config),
        }
    }
}

#[async_trait]
impl QueueApi for SqsApi {
    async fn list_queues_page(&self, cursor: Option<String>) -> Result<Page<String>> {
        let response = self
            .inner
            .list_queues()
            .set_next_token(cursor)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(Page {
            items: response.queue_urls.unwrap_or_default(),
            next_cursor: response.next_token,
        })
    }

    async fn queue_attributes(
        &self,
        queue_url: &str,
        scope: AttributeScope,
    ) -> Result<BTreeMap<String, String>> {
        let name = match scope {
            AttributeScope::All => QueueAttributeName::All,
            AttributeScope::MessageCount => QueueAttributeName::ApproximateNumberOfMessages,
        };

        let response = self
            .inner
            .get_queue_attributes()
            .queue_url(queue_url)
            .attribute_names(name)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(response
            .attributes
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect())
    }

    async fn purge_queue(&self, queue_url: &str) -> Result<()> {
        self.inner
            .purge_queue()
            .queue_url(queue_url)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;
        Ok(())
    }

    async fn receive_messages(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_seconds: i32,
    ) -> Result<Vec<ReceivedMessage>> {
        let response = self
            .inner
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_seconds)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(response
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(|m| ReceivedMessage {
                message_id: m.message_id.unwrap_or_default(),
                body: m.body.unwrap_or_default(),
            })
            .collect())
    }

    async fn send_message(&self, queue_url: &str, body: &str) -> Result<SendReceipt> {
        let response = self
            .inner
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(SendReceipt {
            message_id: response.message_id.unwrap_or_default(),
        })
    }

    async fn send_message_batch(
        &self,
        queue_url: &str,
        entries: &[BatchEntry],
    ) -> Result<BatchOutcome> {
        let request_entries = entries
            .iter()
            .map(|e| {
                SendMessageBatchRequestEntry::builder()
                    .id(&e.id)
                    .message_body(&e.body)
                    .build()
                    .map_err(|err| Error::Remote(err.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let response = self
            .inner
            .send_message_batch()
            .queue_url(queue_url)
            .set_entries(Some(request_entries))
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        Ok(BatchOutcome {
            successful: response
                .successful()
                .iter()
                .map(|s| s.id().to_string())
                .collect(),
            failed: response
                .failed()
                .iter()
                .map(|f| BatchFailure {
                    id: f.id().to_string(),
                    reason: f.message().unwrap_or(f.code()).to_string(),
                })
                .collect(),
        })
    }
}
