//! Whole-second sample scheduler.
//!
//! Gates the sensor-to-history push on elapsed wall-clock time: one fire per
//! whole second since the last poll, catching up after stalls (a blocking
//! delay, a firmware transfer) so no seconds are silently dropped under
//! scheduling jitter. Catch-up is capped: past one full history of missed
//! seconds every older sample would be overwritten anyway, so the excess is
//! discarded in O(1) instead of looping.

use crate::config::{MAX_CATCHUP_SAMPLES, SAMPLE_PERIOD_MS};

/// Elapsed-time gate firing once per [`SAMPLE_PERIOD_MS`].
pub struct SecondTicker {
    last_fire_ms: u64,
}

impl SecondTicker {
    /// Create a ticker anchored at `now_ms`; the first fire is one full
    /// period later.
    pub const fn new(now_ms: u64) -> Self { Self { last_fire_ms: now_ms } }

    /// Number of samples due since the last poll, capped at
    /// [`MAX_CATCHUP_SAMPLES`]. The time source must be monotonic;
    /// a non-monotonic reading yields zero fires rather than a panic.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> u32 {
        let periods = now_ms.saturating_sub(self.last_fire_ms) / SAMPLE_PERIOD_MS;
        self.last_fire_ms += periods * SAMPLE_PERIOD_MS;
        periods.min(u64::from(MAX_CATCHUP_SAMPLES)) as u32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
