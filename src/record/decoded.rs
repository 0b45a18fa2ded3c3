use super::RecordHeader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub secs: u32,
    pub nsecs: u32,
}

/// One record as handed to the caller: framing metadata plus an owned copy of
/// exactly `captured_length` payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub timestamp: Timestamp,
    pub captured_length: u32,
    pub original_length: u32,
    pub stride: u64,
    pub payload: Vec<u8>,
}

impl DecodedRecord {
    pub fn new(header: &RecordHeader, payload: Vec<u8>) -> Self {
        Self {
            timestamp: Timestamp {
                secs: header.ts_sec,
                // out-of-range usec wraps in u32
                nsecs: header.ts_usec.wrapping_mul(1000),
            },
            captured_length: header.caplen,
            original_length: header.datalen,
            stride: header.stride(),
            payload,
        }
    }

    /// Whether the capture kept fewer bytes than were on the wire.
    pub fn is_truncated(&self) -> bool {
        self.captured_length < self.original_length
    }
}
