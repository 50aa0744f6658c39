//! awsutil-aws: AWS SDK adapter for the awsutil CLI
//!
//! Implements the boundary traits from awsutil-core over aws-sdk-sqs and
//! aws-sdk-s3, and builds SDK sessions from the persisted settings.

pub mod s3;
pub mod session;
pub mod sqs;

pub use s3::S3Api;
pub use session::build_session;
pub use sqs::SqsApi;
