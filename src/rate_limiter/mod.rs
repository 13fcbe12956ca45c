use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Keeps consecutive requests to one service at least `delay` apart.
/// Shared by reference, so concurrent callers queue on the inner lock.
pub struct RateLimiter {
    delay: Duration,
    state: Mutex<LimiterState>,
}

#[derive(Default)]
struct LimiterState {
    last_request: Option<Instant>,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            state: Mutex::new(LimiterState::default()),
        }
    }

    pub async fn wait(&self) {
        let mut state = self.state.lock().await;
        if let Some(deadline) = self.next_slot(&state) {
            sleep_until(deadline).await;
        }
        state.last_request = Some(Instant::now());
        state.request_count += 1;
    }

    pub async fn request_count(&self) -> usize {
        self.state.lock().await.request_count
    }

    fn next_slot(&self, state: &LimiterState) -> Option<Instant> {
        state
            .last_request
            .map(|last| last + self.delay)
            .filter(|deadline| *deadline > Instant::now())
    }
}
