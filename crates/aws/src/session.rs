//! Session construction
//!
//! Builds one authenticated SDK configuration per menu entry from the
//! persisted settings. Non-empty region/profile values override the SDK's
//! own resolution chain; credential lookup itself is delegated to the SDK.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use awsutil_core::Settings;

/// Build an SDK session from the current settings record
pub async fn build_session(settings: &Settings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if !settings.region.is_empty() {
        loader = loader.region(Region::new(settings.region.clone()));
    }
    if !settings.profile.is_empty() {
        loader = loader.profile_name(&settings.profile);
    }

    tracing::debug!(
        region = %settings.region,
        profile = %settings.profile,
        "building session"
    );
    loader.load().await
}
