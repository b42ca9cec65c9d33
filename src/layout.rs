//! Bit layout of a snowflake identifier
//!
//! Most-significant bit first: 1 always-zero sign bit, 41 bits of
//! milliseconds since a configured epoch, 5 bits datacenter id, 5 bits
//! worker id, 12 bits per-millisecond sequence.

use crate::error::SnowgenError;

/// Bits reserved for the millisecond timestamp (~69 years past the epoch)
pub const TIMESTAMP_BITS: u32 = 41;
/// Bits reserved for the datacenter id
pub const DATACENTER_ID_BITS: u32 = 5;
/// Bits reserved for the worker id
pub const WORKER_ID_BITS: u32 = 5;
/// Bits reserved for the per-millisecond sequence
pub const SEQUENCE_BITS: u32 = 12;

/// Largest encodable millisecond offset from the epoch
pub const MAX_TIMESTAMP: u64 = (1 << TIMESTAMP_BITS) - 1;
/// Largest valid datacenter id
pub const MAX_DATACENTER_ID: u8 = (1 << DATACENTER_ID_BITS) - 1;
/// Largest valid worker id
pub const MAX_WORKER_ID: u8 = (1 << WORKER_ID_BITS) - 1;
/// Largest sequence value within one millisecond
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

/// Shift applied to the worker id field
pub const WORKER_ID_SHIFT: u32 = SEQUENCE_BITS;
/// Shift applied to the datacenter id field
pub const DATACENTER_ID_SHIFT: u32 = SEQUENCE_BITS + WORKER_ID_BITS;
/// Shift applied to the timestamp field
pub const TIMESTAMP_SHIFT: u32 = SEQUENCE_BITS + WORKER_ID_BITS + DATACENTER_ID_BITS;

/// Pack components into a 64-bit identifier.
///
/// `timestamp_ms` is an absolute wall-clock millisecond; only its offset
/// from `epoch_ms` is stored. Fails with [`SnowgenError::InvalidParams`]
/// when a component exceeds its field width, when the timestamp precedes
/// the epoch, or when the offset does not fit in 41 bits.
pub fn encode(
    timestamp_ms: u64,
    epoch_ms: u64,
    datacenter_id: u8,
    worker_id: u8,
    sequence: u16,
) -> Result<u64, SnowgenError> {
    if datacenter_id > MAX_DATACENTER_ID {
        return Err(SnowgenError::InvalidParams {
            param: "datacenter_id",
            value: datacenter_id as i64,
            expected: "0..=31",
        });
    }
    if worker_id > MAX_WORKER_ID {
        return Err(SnowgenError::InvalidParams {
            param: "worker_id",
            value: worker_id as i64,
            expected: "0..=31",
        });
    }
    if sequence > MAX_SEQUENCE {
        return Err(SnowgenError::InvalidParams {
            param: "sequence",
            value: sequence as i64,
            expected: "0..=4095",
        });
    }

    let offset = timestamp_ms
        .checked_sub(epoch_ms)
        .ok_or(SnowgenError::InvalidParams {
            param: "timestamp_ms",
            value: timestamp_ms as i64,
            expected: "a millisecond at or after the epoch",
        })?;
    if offset > MAX_TIMESTAMP {
        return Err(SnowgenError::InvalidParams {
            param: "timestamp_ms",
            value: timestamp_ms as i64,
            expected: "an offset within 41 bits of the epoch",
        });
    }

    Ok((offset << TIMESTAMP_SHIFT)
        | ((datacenter_id as u64) << DATACENTER_ID_SHIFT)
        | ((worker_id as u64) << WORKER_ID_SHIFT)
        | sequence as u64)
}

/// Unpack an identifier into `(timestamp_ms, datacenter_id, worker_id,
/// sequence)`, the exact inverse of [`encode`] for the same `epoch_ms`.
#[inline]
pub fn decode(id: u64, epoch_ms: u64) -> (u64, u8, u8, u16) {
    (
        ((id >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP) + epoch_ms,
        ((id >> DATACENTER_ID_SHIFT) as u8) & MAX_DATACENTER_ID,
        ((id >> WORKER_ID_SHIFT) as u8) & MAX_WORKER_ID,
        (id & MAX_SEQUENCE as u64) as u16,
    )
}
