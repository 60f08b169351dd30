use crate::domain::model::{BookingRequest, BookingResult};
use crate::domain::ports::BookingService;
use crate::utils::error::{NestlyError, Result};
use std::time::Duration;

/// Retry parameters for a commit sequence. The default matches the
/// historical behavior: 3 attempts, fixed 1.5s pause between them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1500),
            multiplier: 1.0,
        }
    }
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff: delay,
            multiplier: 1.0,
        }
    }

    /// Pause after the given (1-based) failed attempt. A multiplier of 1.0
    /// gives a fixed delay; larger values give exponential backoff.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let ms = self.initial_backoff.as_millis() as f64 * self.multiplier.powi(exponent as i32);
        Duration::from_millis(ms as u64)
    }
}

/// Persists a booking after a captured payment, retrying a bounded number
/// of times. The request payload is never mutated between attempts and the
/// attempts are strictly sequential.
pub struct BookingCommitter<S: BookingService> {
    service: S,
    policy: RetryPolicy,
}

impl<S: BookingService> BookingCommitter<S> {
    pub fn new(service: S) -> Self {
        Self::with_policy(service, RetryPolicy::default())
    }

    pub fn with_policy(service: S, policy: RetryPolicy) -> Self {
        Self { service, policy }
    }

    pub fn into_inner(self) -> S {
        self.service
    }

    /// Attempt to create the booking, retrying on any failure. All failure
    /// kinds are retried uniformly. After the final attempt fails, the
    /// last cause is surfaced as `NestlyError::CommitFailed` - at that
    /// point money has moved but no reservation exists, so callers owe the
    /// user support-contact guidance rather than a plain error message.
    pub async fn commit(&self, request: &BookingRequest) -> Result<BookingResult> {
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            tracing::info!(
                "📦 Attempt {}/{}: creating booking for room {}",
                attempt,
                max_attempts,
                request.room_id
            );

            match self.service.create_booking(request).await {
                Ok(result) => {
                    tracing::info!("✅ Booking {} created on attempt {}", result.id, attempt);
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!("⚠️ Booking creation attempt {} failed: {}", attempt, e);

                    if attempt == max_attempts {
                        return Err(NestlyError::CommitFailed {
                            attempts: max_attempts,
                            source: Box::new(e),
                        });
                    }

                    let delay = self.policy.backoff_for(attempt);
                    tracing::warn!("⏳ Retrying in {:?}...", delay);
                    tokio::time::sleep(delay).await;
                }
            }
        }

        unreachable!("loop returns on the final attempt")
    }
}
