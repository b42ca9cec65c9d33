/// Decimal rendering for snowflake ids
///
/// A 64-bit id renders to at most 20 base-10 digits. Callers that bring
/// their own buffer must provide at least [`MIN_BUFFER_LEN`] bytes - the
/// 20 digits plus one byte of slack for a terminator, mirroring the
/// classic C binding contract.
use crate::error::SnowgenError;

/// Maximum length of a u64 rendered in base 10 (20 digits)
pub const MAX_LEN: usize = 20;

/// Minimum caller-buffer capacity accepted by [`encode_into`]
pub const MIN_BUFFER_LEN: usize = MAX_LEN + 1;

/// Encode an id as a base-10 string
///
/// # Arguments
/// * `id` - The u64 id to render
///
/// # Returns
/// * `String` - The decimal representation
pub fn encode(id: u64) -> String {
    let mut scratch = [0u8; MAX_LEN];
    let start = render(id, &mut scratch);
    // the slice only ever holds ASCII digits
    String::from_utf8_lossy(&scratch[start..]).into_owned()
}

/// Encode an id into a caller-provided buffer, returning the digit count
///
/// # Arguments
/// * `id` - The u64 id to render
/// * `buf` - Destination of at least [`MIN_BUFFER_LEN`] bytes
///
/// # Returns
/// * `Result<usize, SnowgenError>` - Number of digits written, or
///   `InvalidParams` when the buffer is too small
pub fn encode_into(id: u64, buf: &mut [u8]) -> Result<usize, SnowgenError> {
    ensure_capacity(buf)?;

    let mut scratch = [0u8; MAX_LEN];
    let start = render(id, &mut scratch);
    let len = MAX_LEN - start;
    buf[..len].copy_from_slice(&scratch[start..]);
    Ok(len)
}

/// Check a caller buffer against the minimum capacity contract
pub(crate) fn ensure_capacity(buf: &[u8]) -> Result<(), SnowgenError> {
    if buf.len() < MIN_BUFFER_LEN {
        return Err(SnowgenError::InvalidParams {
            param: "buffer",
            value: buf.len() as i64,
            expected: "at least 21 bytes",
        });
    }
    Ok(())
}

/// Write digits right-aligned into `scratch`, returning the start index
fn render(mut id: u64, scratch: &mut [u8; MAX_LEN]) -> usize {
    let mut position = MAX_LEN;
    loop {
        position -= 1;
        scratch[position] = b'0' + (id % 10) as u8;
        id /= 10;
        if id == 0 {
            break;
        }
    }
    position
}

/// Decode a base-10 string back to a u64 id
///
/// # Arguments
/// * `encoded` - The decimal string
///
/// # Returns
/// * `Result<u64, DecodeError>` - The decoded id or an error
pub fn decode(encoded: &str) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::EmptyString);
    }

    let mut result: u64 = 0;
    for &c in encoded.as_bytes() {
        if !c.is_ascii_digit() {
            return Err(DecodeError::InvalidCharacter(c as char));
        }

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add((c - b'0') as u64))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

/// Errors that can occur during decimal decoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input string is empty
    #[error("Cannot decode an empty string")]
    EmptyString,

    /// The input string contains a non-digit character
    #[error("Invalid decimal character: {0}")]
    InvalidCharacter(char),

    /// The decoded value would overflow a u64
    #[error("Decoded value would overflow u64")]
    Overflow,
}
