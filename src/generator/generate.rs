//! Id generation logic
//!
//! One CAS loop drives three transitions on the packed state word: claiming
//! a fresh millisecond, incrementing the sequence within the current one,
//! and compensating for a tolerated backward clock jump.

use std::sync::atomic::Ordering;

use super::state::State;
use super::Snowgen;
use crate::error::SnowgenError;
use crate::generator::Clock;
use crate::layout;

/// Compensated issues allowed per regression window before failing
const COMPENSATION_BUDGET: u32 = layout::MAX_SEQUENCE as u32 + 1;

impl<C: Clock> Snowgen<C> {
    /// Generate a new 64-bit identifier.
    ///
    /// Ids from one instance strictly increase as integers while the clock
    /// behaves. During a tolerated regression the id still increases, but
    /// its timestamp field repeats the previous millisecond, so ordering by
    /// embedded timestamp is relaxed rather than total.
    ///
    /// # Errors
    ///
    /// - [`SnowgenError::ClockBackwards`] when the clock regressed beyond
    ///   the configured tolerance; no id is issued and state is unchanged.
    /// - [`SnowgenError::SequenceExceeded`] when a regression window runs
    ///   out of sequence numbers for the pinned millisecond.
    /// - [`SnowgenError::RetryExceeded`] when the CAS loses more rounds
    ///   than `max_retries` allows, a sign of pathological contention.
    /// - [`SnowgenError::InvalidParams`] when the clock reads before the
    ///   configured epoch or past its 41-bit range.
    pub fn next_id(&self) -> Result<u64, SnowgenError> {
        let mut retries = 0u32;

        loop {
            let now = self.now_since_epoch()?;
            let current = State::from_raw(self.state.load(Ordering::Acquire));

            if now > current.timestamp() {
                // Fresh millisecond: claim it with sequence 0
                if self.cas_state(current, State::new(now, 0)) {
                    self.compensated.store(0, Ordering::Release);
                    return Ok(self.assemble_id(now, 0));
                }
            } else if now == current.timestamp() {
                if current.sequence() >= layout::MAX_SEQUENCE {
                    // All 4096 sequences issued this millisecond; outwait
                    // the clock, then re-enter the loop. Waiters hold no
                    // lock and the wait does not consume retry budget.
                    self.wait_next_millis(current.timestamp());
                    continue;
                }
                let next = State::new(now, current.sequence() + 1);
                if self.cas_state(current, next) {
                    return Ok(self.assemble_id(now, next.sequence()));
                }
            } else if let Some(id) = self.try_compensate(current, current.timestamp() - now)? {
                return Ok(id);
            }

            retries += 1;
            if retries > self.config.max_retries() {
                return Err(SnowgenError::RetryExceeded {
                    retries: self.config.max_retries(),
                });
            }
        }
    }

    /// Issue an id pinned to the last committed millisecond while the wall
    /// clock lags behind it.
    ///
    /// Compensated ids continue that millisecond's sequence, so a pair
    /// already emitted is never reused. The regression cannot be outwaited
    /// forwards, so exhaustion fails instead of blocking.
    fn try_compensate(&self, current: State, skew_ms: u64) -> Result<Option<u64>, SnowgenError> {
        let tolerance_ms = self.config.tolerance_ms();
        if skew_ms > tolerance_ms {
            return Err(SnowgenError::ClockBackwards {
                skew_ms,
                tolerance_ms,
            });
        }

        if current.sequence() >= layout::MAX_SEQUENCE
            || self.compensated.load(Ordering::Acquire) >= COMPENSATION_BUDGET
        {
            return Err(SnowgenError::SequenceExceeded {
                timestamp: current.timestamp(),
            });
        }

        let next = State::new(current.timestamp(), current.sequence() + 1);
        if self.cas_state(current, next) {
            // Budget bookkeeping only; uniqueness rides on the packed word
            self.compensated.fetch_add(1, Ordering::AcqRel);
            return Ok(Some(self.assemble_id(next.timestamp(), next.sequence())));
        }
        Ok(None)
    }

    /// Atomic compare-and-swap on state
    #[inline(always)]
    pub(crate) fn cas_state(&self, expected: State, new: State) -> bool {
        self.state
            .compare_exchange(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
