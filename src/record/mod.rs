pub mod decoded;
pub mod header;

pub use decoded::{DecodedRecord, Timestamp};
pub use header::{RecordHeader, round_up};
