use std::time::Duration;

use crate::domain::common::entities::app_errors::CoreError;

/// Sliding-window counter keyed by caller and operation.
#[cfg_attr(test, mockall::automock)]
pub trait RateLimiter: Send + Sync {
    /// Records a hit and returns `false` when `key` already used `limit` hits within `window`.
    fn try_acquire(
        &self,
        key: String,
        limit: u32,
        window: Duration,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
