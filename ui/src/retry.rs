//! Bounded-attempt fetch helper with a fixed inter-attempt delay.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::compat;

/// Raised once every attempt has failed. Terminal: the caller does not get
/// further attempts without starting over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("server did not respond after {attempts} attempts")]
pub struct ServerUnavailable {
    pub attempts: u32,
}

/// Progress notifications emitted while [`fetch_with_retry`] runs. These are
/// observable side effects only; the payload travels through the return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchProgress {
    /// About to run the given attempt (1-based).
    Attempt(u32),
    /// An attempt succeeded; any progress display should be dismissed.
    Cleared,
}

/// Runs `op` up to `attempts` times, sleeping exactly `delay` between failed
/// attempts. No backoff, no jitter.
///
/// `on_progress` fires before every attempt and once more on success. The
/// first `Ok` is returned immediately; remaining attempts are not consumed.
pub async fn fetch_with_retry<T, E, F, Fut>(
    attempts: u32,
    delay: Duration,
    mut op: F,
    mut on_progress: impl FnMut(FetchProgress),
) -> Result<T, ServerUnavailable>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    for attempt in 1..=attempts {
        on_progress(FetchProgress::Attempt(attempt));
        match op(attempt).await {
            Ok(value) => {
                on_progress(FetchProgress::Cleared);
                return Ok(value);
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("attempt {attempt}/{attempts} failed: {e}");
                if attempt < attempts {
                    compat::sleep(delay).await;
                }
            }
        }
    }
    Err(ServerUnavailable { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(30);

    #[tokio::test(start_paused = true)]
    async fn returns_first_success_after_transient_failures() {
        let mut events = Vec::new();
        let started = tokio::time::Instant::now();

        let result = fetch_with_retry(
            4,
            DELAY,
            |attempt| async move {
                if attempt <= 3 {
                    Err("connection refused")
                } else {
                    Ok("payload")
                }
            },
            |progress| events.push(progress),
        )
        .await;

        assert_eq!(result, Ok("payload"));
        // Three failures, three full delays, then the fourth attempt wins.
        assert_eq!(started.elapsed(), DELAY * 3);
        assert_eq!(
            events,
            vec![
                FetchProgress::Attempt(1),
                FetchProgress::Attempt(2),
                FetchProgress::Attempt(3),
                FetchProgress::Attempt(4),
                FetchProgress::Cleared,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempts_and_fails() {
        let mut events = Vec::new();
        let started = tokio::time::Instant::now();

        let result: Result<(), _> = fetch_with_retry(
            4,
            DELAY,
            |_| async { Err("boom") },
            |progress| events.push(progress),
        )
        .await;

        assert_eq!(result, Err(ServerUnavailable { attempts: 4 }));
        // No delay after the final failure.
        assert_eq!(started.elapsed(), DELAY * 3);
        assert_eq!(
            events,
            vec![
                FetchProgress::Attempt(1),
                FetchProgress::Attempt(2),
                FetchProgress::Attempt(3),
                FetchProgress::Attempt(4),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_sleeps_never() {
        let started = tokio::time::Instant::now();
        let mut calls = 0u32;

        let result = fetch_with_retry(
            4,
            DELAY,
            |_| {
                calls += 1;
                async { Ok::<_, &str>(42) }
            },
            |_| {},
        )
        .await;

        assert_eq!(result, Ok(42));
        assert_eq!(calls, 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
