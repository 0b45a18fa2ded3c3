/// Fixed 18-byte header at the start of every record.
///
/// Fields are extracted at explicit byte offsets and converted from little
/// endian, so the in-memory layout of this struct never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub ts_sec: u32,
    pub ts_usec: u32,
    pub caplen: u32,
    pub datalen: u32,
    pub hdrlen: u8,
    pub align: u8,
}

impl RecordHeader {
    pub const SIZE: usize = 18;

    pub fn parse(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            ts_sec: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
            ts_usec: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            caplen: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            datalen: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            hdrlen: buf[16],
            align: buf[17],
        }
    }

    /// Distance from the start of this record to the start of the next.
    #[inline]
    pub fn stride(&self) -> u64 {
        round_up(self.hdrlen as u64 + self.caplen as u64, self.align)
    }
}

/// Rounds `x` up to the next multiple of `align`.
///
/// Equivalent to `(x + align - 1) & !(align - 1)` when `align` is a power of
/// two. Other values are honored as a plain modulus, and `0` means no padding.
#[inline]
pub fn round_up(x: u64, align: u8) -> u64 {
    let m = align.max(1) as u64;
    x.div_ceil(m) * m
}
