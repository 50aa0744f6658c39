//! awsutil-core: resource-access layer for the awsutil CLI
//!
//! This crate provides the logic that turns high-level intents into
//! correctly batched, paginated, and validated remote calls:
//! - Batch chunking and cursor-based pagination
//! - Queue and bucket resource clients
//! - The settings store and web console URL builders
//!
//! It is independent of any specific AWS SDK: remote access goes through
//! the [`traits::QueueApi`] and [`traits::StorageApi`] boundary traits,
//! implemented by the adapter crate and mocked in tests.

pub mod batch;
pub mod config;
pub mod console_url;
pub mod error;
pub mod paginate;
pub mod queue;
pub mod storage;
pub mod traits;

pub use config::{Settings, SettingsStore};
pub use error::{Error, Result};
pub use paginate::{drain_pages, Page};
pub use queue::{BatchReport, ChunkReport, QueueClient};
pub use storage::BucketClient;
pub use traits::{
    AttributeScope, BatchEntry, BatchFailure, BatchOutcome, QueueApi, QueueSummary,
    ReceivedMessage, SendReceipt, StorageApi,
};
