use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use nonzero_ext::*;
use crate::config::constants::BURST_REQUESTS_PER_SECOND;

/// Client-side throttle awaited before every provider call.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(nonzero!(1u32));
        let per_second = NonZeroU32::new(BURST_REQUESTS_PER_SECOND).unwrap_or(nonzero!(1u32));

        let limiter = Arc::new(RateLimiter::direct(Quota::per_minute(per_minute)));
        let burst_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));

        Self {
            limiter,
            burst_limiter,
        }
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn quota_is_exhausted_after_the_per_minute_budget() {
        let limiter = ApiRateLimiter::new(2);

        limiter.acquire().await;
        assert!(limiter.limiter.check().is_ok());
        assert!(limiter.limiter.check().is_err());
    }

    #[test]
    fn zero_quota_is_clamped_to_one() {
        let limiter = ApiRateLimiter::new(0);
        assert!(limiter.limiter.check().is_ok());
        assert!(limiter.limiter.check().is_err());
    }
}
