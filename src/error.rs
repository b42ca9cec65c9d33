use thiserror::Error;

/// Represents errors that can occur during Snowgen operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowgenError {
    /// Error when a parameter is outside its permitted range: a worker or
    /// datacenter id above 31, a pre-epoch or overflowing timestamp, or a
    /// text buffer below the minimum capacity
    #[error("Invalid {param}: got {value}, expected {expected}")]
    InvalidParams {
        param: &'static str,
        value: i64,
        expected: &'static str,
    },
    /// Error when an operation runs against a generator that was never
    /// initialized
    #[error("Generator is not initialized")]
    NotInitialized,
    /// Error when a scope that already owns a live generator is initialized
    /// a second time
    #[error("Generator is already initialized")]
    AlreadyInitialized,
    /// Error when the clock moves backwards beyond the configured tolerance
    #[error("Clock moved backwards. Refusing to generate id for {skew_ms} milliseconds (tolerance is {tolerance_ms} ms)")]
    ClockBackwards { skew_ms: u64, tolerance_ms: u64 },
    /// Error when the sequence space of a millisecond is exhausted while
    /// absorbing a tolerated clock regression
    #[error("Sequence space exhausted at timestamp {timestamp} while compensating for a backward clock")]
    SequenceExceeded { timestamp: u64 },
    /// Error when a state update loses the CAS race more times than the
    /// configured retry budget allows
    #[error("State update contended beyond {retries} retries")]
    RetryExceeded { retries: u32 },
}
