//! Bounded fixed-backoff retry for rate-limited model calls.
//!
//! Hosted model endpoints occasionally reject requests with a quota
//! error; the mitigation is a fixed delay and a bounded number of
//! attempts. The policy retries only errors classified as transient by
//! [`AnalyzerError::is_rate_limited`]; anything else propagates on the
//! first attempt.
//!
//! Sleeping goes through the [`Sleeper`] trait so the policy can be
//! exercised in tests without real delays.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AnalyzerError, Result};

/// Default number of attempts before giving up.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between rate-limited attempts.
const DEFAULT_DELAY: Duration = Duration::from_secs(60);

/// Injected delay source.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspends the caller for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Bounded retry with a fixed delay on rate-limit errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with explicit attempt and delay settings.
    ///
    /// `max_attempts` counts the initial attempt, so a value of 1 never
    /// retries. A value of 0 is treated as 1.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Runs an operation, retrying rate-limited failures.
    ///
    /// Sleeps `delay` between attempts via the provided sleeper. The
    /// last error is returned once attempts are exhausted;
    /// non-rate-limit errors are returned immediately.
    pub async fn run<T, F, Fut>(&self, sleeper: &dyn Sleeper, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_rate_limited() && attempt < self.max_attempts => {
                    log::warn!(
                        "Rate limit hit (attempt {attempt}/{}), waiting {:?} before retry",
                        self.max_attempts,
                        self.delay
                    );
                    sleeper.sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records requested delays instead of sleeping.
    struct RecordingSleeper {
        delays: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn new() -> Self {
            Self {
                delays: Mutex::new(Vec::new()),
            }
        }

        fn recorded(&self) -> Vec<Duration> {
            self.delays.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.delays.lock().unwrap().push(duration);
        }
    }

    fn rate_limited() -> AnalyzerError {
        AnalyzerError::Api {
            status: 429,
            message: "rate_limit_exceeded".to_string(),
        }
    }

    #[tokio::test]
    async fn succeeds_without_sleeping() {
        let sleeper = RecordingSleeper::new();
        let policy = RetryPolicy::default();

        let result = policy.run(&sleeper, || async { Ok(42) }).await.unwrap();

        assert_eq!(result, 42);
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn retries_rate_limits_with_fixed_delay() {
        let sleeper = RecordingSleeper::new();
        let policy = RetryPolicy::new(3, Duration::from_secs(60));
        let attempts = Mutex::new(0);

        let result = policy
            .run(&sleeper, || async {
                let mut count = attempts.lock().unwrap();
                *count += 1;
                if *count < 3 {
                    Err(rate_limited())
                } else {
                    Ok("done")
                }
            })
            .await
            .unwrap();

        assert_eq!(result, "done");
        assert_eq!(
            sleeper.recorded(),
            vec![Duration::from_secs(60), Duration::from_secs(60)]
        );
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let sleeper = RecordingSleeper::new();
        let policy = RetryPolicy::new(3, Duration::from_secs(60));

        let result: Result<()> = policy.run(&sleeper, || async { Err(rate_limited()) }).await;

        assert!(result.unwrap_err().is_rate_limited());
        assert_eq!(sleeper.recorded().len(), 2);
    }

    #[tokio::test]
    async fn non_transient_errors_fail_fast() {
        let sleeper = RecordingSleeper::new();
        let policy = RetryPolicy::new(3, Duration::from_secs(60));

        let result: Result<()> = policy
            .run(&sleeper, || async {
                Err(AnalyzerError::configuration("bad endpoint"))
            })
            .await;

        assert!(matches!(
            result,
            Err(AnalyzerError::Configuration { .. })
        ));
        assert!(sleeper.recorded().is_empty());
    }
}
