//! Web console deep links
//!
//! Pure string construction from fixed templates; the templates must match
//! the provider's console routes exactly. No network calls here.

use crate::traits::short_name;

/// Deep link to a queue in the provider's web console
///
/// Only the queue's short name (last `/` segment) appears in the link.
pub fn queue_console_url(queue_url: &str, region: &str) -> String {
    let queue_name = short_name(queue_url);
    format!(
        "https://{region}.console.aws.amazon.com/sqs/v2/home?region={region}#/queues/{queue_name}"
    )
}

/// Deep link to a bucket's object listing in the provider's web console
pub fn bucket_console_url(bucket: &str, region: &str) -> String {
    format!("https://s3.console.aws.amazon.com/s3/buckets/{bucket}?region={region}&tab=objects")
}
