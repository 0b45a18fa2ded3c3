//! Error types for usbdump decoding.
//!
//! Two outcomes are deliberately not errors: a file that is not a usbdump
//! capture is reported as [`Detection::NotMine`](crate::storage::Detection),
//! and the clean end of sequential iteration is `Ok(None)`.
//!
//! Everything here is fatal for the call that produced it but leaves the
//! handle usable; the caller decides whether to stop iterating.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("short read of {what} at offset {offset}: expected {expected} bytes, got {read}")]
    ShortRead {
        offset: u64,
        what: &'static str,
        expected: usize,
        read: usize,
    },

    #[error("bad record header at offset {offset}: header length {hdrlen} is below the fixed 18 bytes")]
    BadRecordHeader { offset: u64, hdrlen: u8 },

    #[error("record at offset {offset} captures {caplen} bytes, maximum is {max}")]
    CaptureTooLarge { offset: u64, caplen: u32, max: u32 },

    #[error("no record at offset {offset}: end of file")]
    NoRecordAt { offset: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
