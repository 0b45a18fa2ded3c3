//! Decoder for usbdump capture files.
//!
//! A capture is a 32-byte file header followed by length-prefixed bunches of
//! records. [`storage::SequentialReader`] walks the records in order and
//! reports each record's absolute offset; [`storage::RandomReader`] and
//! [`storage::MmapRandomReader`] decode a single record from such an offset
//! without any bunch state. [`storage::CaptureFile`] bundles both over one
//! path.

pub mod config;
pub mod error;
pub mod record;
pub mod storage;

pub use config::{RandomAccess, ReaderConfig};
pub use error::{Error, Result};
pub use record::{DecodedRecord, RecordHeader, Timestamp};
pub use storage::{
    BunchState, CaptureFile, Detection, FileHeader, MmapRandomReader, RandomReader,
    SequentialReader,
};
