//! Delay policy between soft-failure retries.

use std::time::Duration;

/// Wait applied before re-issuing a request that came back with an in-band
/// error message.
///
/// The default waits zero time, so retries are immediate. Use
/// [`RetryBackoff::exponential`] against a rate-limited deployment.
///
/// # Example
///
/// ```rust
/// use paladins_api::RetryBackoff;
/// use std::time::Duration;
///
/// let backoff = RetryBackoff::exponential(Duration::from_millis(200))
///     .with_max(Duration::from_secs(2))
///     .with_jitter(0.0);
///
/// assert_eq!(backoff.delay(0), Duration::from_millis(200));
/// assert_eq!(backoff.delay(1), Duration::from_millis(400));
/// assert_eq!(backoff.delay(10), Duration::from_secs(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryBackoff {
    initial: Duration,
    max: Duration,
    multiplier: f64,
    jitter: f64,
}

impl RetryBackoff {
    /// Default cap on a single delay.
    pub const DEFAULT_MAX: Duration = Duration::from_secs(10);

    /// Default growth factor between attempts.
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Default jitter factor (10%).
    pub const DEFAULT_JITTER: f64 = 0.1;

    /// Retries immediately.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            initial: Duration::ZERO,
            max: Duration::ZERO,
            multiplier: 1.0,
            jitter: 0.0,
        }
    }

    /// Exponential backoff starting at `initial`.
    #[must_use]
    pub const fn exponential(initial: Duration) -> Self {
        Self {
            initial,
            max: Self::DEFAULT_MAX,
            multiplier: Self::DEFAULT_MULTIPLIER,
            jitter: Self::DEFAULT_JITTER,
        }
    }

    /// Caps every delay at `max`.
    #[must_use]
    pub const fn with_max(mut self, max: Duration) -> Self {
        self.max = max;
        self
    }

    /// Sets the growth factor applied after each retry.
    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the jitter factor, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Returns `true` if retries happen without waiting.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.initial.is_zero()
    }

    /// Delay before retry number `retry` (zero-based).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn delay(&self, retry: u32) -> Duration {
        if self.is_immediate() {
            return Duration::ZERO;
        }

        let base = self.initial.as_millis() as f64 * self.multiplier.powi(retry as i32);
        let capped = base.min(self.max.as_millis() as f64);

        let jitter_range = capped * self.jitter;
        let jitter = if jitter_range > 0.0 {
            rand::random::<f64>() * 2.0 * jitter_range - jitter_range
        } else {
            0.0
        };

        Duration::from_millis((capped + jitter).max(0.0) as u64)
    }
}

impl Default for RetryBackoff {
    fn default() -> Self {
        Self::none()
    }
}
