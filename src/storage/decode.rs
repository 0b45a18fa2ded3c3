use super::read::read_full;
use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::record::{DecodedRecord, RecordHeader};
use std::io::{Read, Seek, SeekFrom};
use tracing::trace;

/// Decodes the record starting at `offset` and leaves the stream at
/// `offset + stride`.
///
/// Knows nothing about bunches. `Ok(None)` means the stream was already at end
/// of file where the header should begin; a header or payload cut off midway
/// is [`Error::ShortRead`].
pub fn decode_record<R: Read + Seek + ?Sized>(
    stream: &mut R,
    offset: u64,
    config: &ReaderConfig,
) -> Result<Option<DecodedRecord>> {
    if stream.stream_position()? != offset {
        stream.seek(SeekFrom::Start(offset))?;
    }

    let mut buf = [0u8; RecordHeader::SIZE];
    let read = read_full(stream, &mut buf)?;
    if read == 0 {
        return Ok(None);
    }
    if read < RecordHeader::SIZE {
        return Err(Error::ShortRead {
            offset,
            what: "record header",
            expected: RecordHeader::SIZE,
            read,
        });
    }

    let header = RecordHeader::parse(&buf);

    if (header.hdrlen as usize) < RecordHeader::SIZE {
        return Err(Error::BadRecordHeader {
            offset,
            hdrlen: header.hdrlen,
        });
    }
    if header.caplen > config.max_caplen {
        return Err(Error::CaptureTooLarge {
            offset,
            caplen: header.caplen,
            max: config.max_caplen,
        });
    }

    let payload_offset = offset + header.hdrlen as u64;
    if header.hdrlen as usize != RecordHeader::SIZE {
        stream.seek(SeekFrom::Start(payload_offset))?;
    }

    let caplen = header.caplen as usize;
    let mut payload = vec![0u8; caplen];
    let read = read_full(stream, &mut payload)?;
    if read < caplen {
        return Err(Error::ShortRead {
            offset: payload_offset,
            what: "record payload",
            expected: caplen,
            read,
        });
    }

    let stride = header.stride();
    if payload_offset + caplen as u64 != offset + stride {
        stream.seek(SeekFrom::Start(offset + stride))?;
    }

    trace!(offset, caplen = header.caplen, stride, "Decoded record");

    Ok(Some(DecodedRecord::new(&header, payload)))
}
