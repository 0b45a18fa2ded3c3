use super::{
    BunchState, Detection, FileHeader, MmapRandomReader, RandomReader, Records, SequentialReader,
};
use crate::config::{RandomAccess, ReaderConfig};
use crate::error::Result;
use crate::record::DecodedRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

enum RandomSource {
    File(RandomReader<BufReader<File>>),
    Mmap(MmapRandomReader),
}

/// An open usbdump capture with two independent cursors over the same file:
/// one for sequential iteration and one for random access.
pub struct CaptureFile {
    sequential: SequentialReader<BufReader<File>>,
    random: RandomSource,
}

impl CaptureFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Detection<Self>> {
        Self::open_with(path, ReaderConfig::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Detection<Self>> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let sequential = match SequentialReader::open_with(BufReader::new(file), config)? {
            Detection::Mine(reader) => reader,
            Detection::NotMine => return Ok(Detection::NotMine),
        };

        let random = match config.random_access {
            RandomAccess::File => {
                RandomSource::File(RandomReader::new(BufReader::new(File::open(path)?), config))
            }
            RandomAccess::Mmap => RandomSource::Mmap(MmapRandomReader::open(path, config)?),
        };

        Ok(Detection::Mine(Self { sequential, random }))
    }

    #[inline]
    pub fn header(&self) -> &FileHeader {
        self.sequential.header()
    }

    #[inline]
    pub fn bunch(&self) -> &BunchState {
        self.sequential.bunch()
    }

    pub fn next_record(&mut self) -> Result<Option<(u64, DecodedRecord)>> {
        self.sequential.next_record()
    }

    pub fn records(&mut self) -> Records<'_, BufReader<File>> {
        self.sequential.records()
    }

    /// Decodes the record at `offset` without moving the sequential cursor.
    pub fn read_at(&mut self, offset: u64) -> Result<DecodedRecord> {
        match &mut self.random {
            RandomSource::File(reader) => reader.read_at(offset),
            RandomSource::Mmap(reader) => reader.read_at(offset),
        }
    }
}
