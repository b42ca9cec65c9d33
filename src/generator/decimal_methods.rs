//! Decimal convenience methods on the generator

use super::Snowgen;
use crate::decimal;
use crate::error::SnowgenError;
use crate::generator::Clock;

impl<C: Clock> Snowgen<C> {
    /// Generate a new id and render it as base-10 text
    pub fn next_id_string(&self) -> Result<String, SnowgenError> {
        Ok(decimal::encode(self.next_id()?))
    }

    /// Generate a new id into a caller-provided buffer of at least
    /// [`decimal::MIN_BUFFER_LEN`] bytes, returning the digit count.
    ///
    /// The buffer is validated before an id is drawn, so a rejected call
    /// never consumes a sequence number.
    pub fn next_id_into(&self, buf: &mut [u8]) -> Result<usize, SnowgenError> {
        decimal::ensure_capacity(buf)?;
        decimal::encode_into(self.next_id()?, buf)
    }
}
