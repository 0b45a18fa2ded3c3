pub mod bunch;
pub mod capture;
pub mod decode;
pub mod header;
pub mod random;
mod read;
pub mod sequential;

pub use bunch::BunchState;
pub use capture::CaptureFile;
pub use decode::decode_record;
pub use header::{Detection, FileHeader, Opened, open_stream};
pub use random::{MmapRandomReader, RandomReader};
pub use sequential::{Records, SequentialReader};
