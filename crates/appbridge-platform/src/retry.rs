//! Exponential backoff retry for platform requests.
//!
//! Applies only to transient failures (network errors, 429, 5xx); mapping
//! and validation errors are never retried. The upsert orchestrator stays
//! retry-free — this policy is the client's own.

use std::time::Duration;
use tracing::{debug, warn};

use appbridge_login_methods::{LoginMethodError, LoginMethodResult};

/// Retry policy configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts (0 = no retries).
    pub max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    pub base_delay_secs: u64,
    /// Maximum delay cap in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_secs: 1,
            max_delay_secs: 30,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given retry count and base delay; the
    /// delay cap defaults to 30 seconds.
    #[must_use]
    pub fn new(max_retries: u32, base_delay_secs: u64) -> Self {
        Self {
            max_retries,
            base_delay_secs,
            max_delay_secs: 30,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    /// Whether the error should be retried at the given attempt number.
    #[must_use]
    pub fn should_retry(&self, attempt: u32, error: &LoginMethodError) -> bool {
        attempt < self.max_retries && error.is_retryable()
    }

    /// Delay before the next attempt.
    ///
    /// A rate-limit error with a `Retry-After` value uses that value
    /// (capped); everything else backs off exponentially from the base
    /// delay.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, error: &LoginMethodError) -> Duration {
        let secs = if let LoginMethodError::RateLimited {
            retry_after_secs: Some(retry_after),
        } = error
        {
            (*retry_after).min(self.max_delay_secs)
        } else {
            self.base_delay_secs
                .saturating_mul(2u64.saturating_pow(attempt))
                .min(self.max_delay_secs)
        };
        Duration::from_secs(secs)
    }

    /// Execute an async operation with retry.
    ///
    /// Non-retryable errors return immediately; retryable errors that
    /// outlast the budget surface as
    /// [`LoginMethodError::MaxRetriesExceeded`].
    pub async fn execute<F, Fut, T>(&self, operation: &str, mut f: F) -> LoginMethodResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = LoginMethodResult<T>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match f().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(
                            operation,
                            attempt = attempt + 1,
                            "Operation succeeded after retries"
                        );
                    }
                    return Ok(value);
                }
                Err(error) if self.should_retry(attempt, &error) => {
                    let delay = self.delay_for(attempt, &error);
                    debug!(
                        operation,
                        attempt = attempt + 1,
                        delay_secs = delay.as_secs(),
                        error = %error,
                        "Retrying after transient failure"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    if error.is_retryable() && attempt >= self.max_retries {
                        warn!(
                            operation,
                            attempts = attempt + 1,
                            error = %error,
                            "Max retries exceeded"
                        );
                        return Err(LoginMethodError::MaxRetriesExceeded {
                            attempts: attempt + 1,
                            message: format!("{operation}: {error}"),
                        });
                    }
                    return Err(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn network_error() -> LoginMethodError {
        LoginMethodError::Network {
            operation: "createLoginMethod".to_string(),
            message: "connection reset".to_string(),
        }
    }

    #[test]
    fn test_should_retry_respects_budget_and_classification() {
        let policy = RetryPolicy::new(2, 1);
        assert!(policy.should_retry(0, &network_error()));
        assert!(policy.should_retry(1, &network_error()));
        assert!(!policy.should_retry(2, &network_error()));
        assert!(!policy.should_retry(
            0,
            &LoginMethodError::NotFound {
                name: "crm".to_string()
            }
        ));
    }

    #[test]
    fn test_delay_honors_retry_after() {
        let policy = RetryPolicy::new(3, 1);
        let error = LoginMethodError::RateLimited {
            retry_after_secs: Some(7),
        };
        assert_eq!(policy.delay_for(0, &error), Duration::from_secs(7));
        // Capped at max_delay_secs.
        let error = LoginMethodError::RateLimited {
            retry_after_secs: Some(600),
        };
        assert_eq!(policy.delay_for(0, &error), Duration::from_secs(30));
    }

    #[test]
    fn test_delay_backs_off_exponentially() {
        let policy = RetryPolicy::new(5, 2);
        assert_eq!(policy.delay_for(0, &network_error()), Duration::from_secs(2));
        assert_eq!(policy.delay_for(1, &network_error()), Duration::from_secs(4));
        assert_eq!(policy.delay_for(2, &network_error()), Duration::from_secs(8));
        assert_eq!(
            policy.delay_for(10, &network_error()),
            Duration::from_secs(30)
        );
    }

    #[tokio::test]
    async fn test_execute_retries_until_success() {
        let policy = RetryPolicy::new(3, 0);
        let calls = AtomicU32::new(0);

        let result = policy
            .execute("op", || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(network_error())
                    } else {
                        Ok(n)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(result, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_execute_gives_up_after_budget() {
        let policy = RetryPolicy::new(1, 0);
        let calls = AtomicU32::new(0);

        let err = policy
            .execute("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(network_error()) }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LoginMethodError::MaxRetriesExceeded { attempts: 2, .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_execute_does_not_retry_permanent_errors() {
        let policy = RetryPolicy::new(3, 0);
        let calls = AtomicU32::new(0);

        let err = policy
            .execute("op", || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Err::<(), _>(LoginMethodError::NotFound {
                        name: "crm".to_string(),
                    })
                }
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
