use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
    time::Duration,
};

use tokio::{sync::Mutex, time::Instant};

use crate::domain::{common::entities::app_errors::CoreError, rate_limit::ports::RateLimiter};

/// Sliding-window limiter for single-instance deployments. State is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateLimiter {
    hits: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RateLimiter for InMemoryRateLimiter {
    async fn try_acquire(&self, key: String, limit: u32, window: Duration) -> Result<bool, CoreError> {
        let now = Instant::now();
        let mut hits = self.hits.lock().await;

        // drop keys with no hit inside the window
        hits.retain(|_, stamps| {
            stamps
                .back()
                .is_some_and(|last| now.duration_since(*last) < window)
        });

        let stamps = hits.entry(key).or_default();
        while stamps
            .front()
            .is_some_and(|first| now.duration_since(*first) >= window)
        {
            stamps.pop_front();
        }

        if stamps.len() >= limit as usize {
            return Ok(false);
        }

        stamps.push_back(now);
        Ok(true)
    }
}
