use super::{BunchState, Detection, FileHeader, Opened, decode_record, open_stream};
use crate::config::ReaderConfig;
use crate::error::Result;
use crate::record::DecodedRecord;
use std::io::{Read, Seek};
use tracing::warn;

/// Walks a capture record by record, crossing bunch boundaries as it goes.
pub struct SequentialReader<R> {
    stream: R,
    header: FileHeader,
    bunch: BunchState,
    config: ReaderConfig,
    failed_at: Option<u64>,
}

impl<R: Read + Seek> SequentialReader<R> {
    pub fn open(stream: R) -> Result<Detection<Self>> {
        Self::open_with(stream, ReaderConfig::default())
    }

    /// Validates the header at the stream's current position. On success the
    /// stream sits at the first record of the first bunch.
    pub fn open_with(mut stream: R, config: ReaderConfig) -> Result<Detection<Self>> {
        Ok(open_stream(&mut stream)?.map(|Opened { header, bunch }| Self {
            stream,
            header,
            bunch,
            config,
            failed_at: None,
        }))
    }

    #[inline]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    #[inline]
    pub fn bunch(&self) -> &BunchState {
        &self.bunch
    }

    /// Decodes the next record and returns it with its absolute offset, which
    /// stays valid for random access later. `Ok(None)` is end of data.
    ///
    /// A record that fails to decode pins the reader to its offset: later
    /// calls decode the same record again instead of moving past it.
    pub fn next_record(&mut self) -> Result<Option<(u64, DecodedRecord)>> {
        let offset = match self.failed_at {
            Some(offset) => offset,
            None => match self.bunch.advance(&mut self.stream)? {
                Some(offset) => offset,
                None => return Ok(None),
            },
        };

        let record = match decode_record(&mut self.stream, offset, &self.config) {
            Ok(record) => record,
            Err(e) => {
                self.failed_at = Some(offset);
                return Err(e);
            }
        };
        self.failed_at = None;

        let Some(record) = record else {
            return Ok(None);
        };

        if let Some(overshoot) = self.bunch.overrun(offset + record.stride) {
            warn!(
                offset,
                bunch_start = self.bunch.start_offset(),
                bunch_len = self.bunch.len(),
                overshoot,
                "Record overran its bunch"
            );
        }

        Ok(Some((offset, record)))
    }

    /// Iterator over the remaining records. Stops after end of data or the
    /// first error.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }
}

pub struct Records<'a, R> {
    reader: &'a mut SequentialReader<R>,
    done: bool,
}

impl<R: Read + Seek> Iterator for Records<'_, R> {
    type Item = Result<(u64, DecodedRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_record() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read + Seek> std::iter::FusedIterator for Records<'_, R> {}
