use super::decode_record;
use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::record::DecodedRecord;
use memmap2::Mmap;
use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Decodes single records at caller-supplied offsets over its own stream.
///
/// Holds no bunch state; the stream position after a read is unspecified, so
/// every call takes an explicit offset.
pub struct RandomReader<R> {
    stream: R,
    config: ReaderConfig,
}

impl<R: Read + Seek> RandomReader<R> {
    pub fn new(stream: R, config: ReaderConfig) -> Self {
        Self { stream, config }
    }

    pub fn read_at(&mut self, offset: u64) -> Result<DecodedRecord> {
        self.stream.seek(SeekFrom::Start(offset))?;
        decode_record(&mut self.stream, offset, &self.config)?.ok_or(Error::NoRecordAt { offset })
    }
}

/// Random access over a read-only memory map of the capture.
///
/// Each read runs on a fresh cursor, so `read_at` takes `&self` and the reader
/// can be shared between threads.
pub struct MmapRandomReader {
    mmap: Mmap,
    config: ReaderConfig,
}

impl MmapRandomReader {
    pub fn open<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Self> {
        let file = File::open(path)?;

        // SAFETY: the map is read-only; captures are not expected to be
        // modified while open.
        let mmap = unsafe { Mmap::map(&file)? };

        #[cfg(unix)]
        mmap.advise(memmap2::Advice::Random)?;

        Ok(Self { mmap, config })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn read_at(&self, offset: u64) -> Result<DecodedRecord> {
        let mut cursor = Cursor::new(&self.mmap[..]);
        cursor.set_position(offset);
        decode_record(&mut cursor, offset, &self.config)?.ok_or(Error::NoRecordAt { offset })
    }
}
