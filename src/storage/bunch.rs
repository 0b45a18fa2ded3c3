use super::read::read_full;
use crate::error::Result;
use std::io::{Read, Seek};
use tracing::{trace, warn};

/// Bookkeeping for the bunch the sequential cursor is currently inside.
///
/// Owned by one sequential reader. Random access never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BunchState {
    start_offset: u64,
    len: u32,
}

impl BunchState {
    pub const PREFIX_SIZE: usize = 4;

    pub fn new(start_offset: u64, len: u32) -> Self {
        Self { start_offset, len }
    }

    /// Offset of the first byte after this bunch's length prefix.
    #[inline]
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    /// Declared byte length of the records in this bunch.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes by which a record ending at `end` runs past this bunch, if any.
    pub fn overrun(&self, end: u64) -> Option<u64> {
        let bunch_end = self.start_offset + self.len as u64;
        end.checked_sub(bunch_end).filter(|&over| over > 0)
    }

    /// Returns the offset of the next record, opening a new bunch first when
    /// the current one is used up.
    ///
    /// `Ok(None)` means end of data: no complete length prefix follows the
    /// exhausted bunch.
    pub fn advance<R: Read + Seek + ?Sized>(&mut self, stream: &mut R) -> Result<Option<u64>> {
        let pos = stream.stream_position()?;
        let consumed = pos.saturating_sub(self.start_offset);

        if consumed < self.len as u64 {
            return Ok(Some(pos));
        }

        let mut buf = [0u8; Self::PREFIX_SIZE];
        let read = read_full(stream, &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        if read < Self::PREFIX_SIZE {
            warn!(offset = pos, read, "Partial bunch length at end of capture");
            return Ok(None);
        }

        self.start_offset = pos + Self::PREFIX_SIZE as u64;
        self.len = u32::from_le_bytes(buf);

        trace!(offset = self.start_offset, len = self.len, "Entered bunch");

        Ok(Some(self.start_offset))
    }
}
