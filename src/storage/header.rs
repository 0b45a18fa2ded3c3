use super::BunchState;
use crate::error::Result;
use std::io::{self, Read, Seek};
use tracing::debug;

/// Outcome of format detection.
///
/// `NotMine` is an ordinary answer, not an error: a dispatcher trying several
/// formats moves on to the next one.
#[derive(Debug)]
pub enum Detection<T> {
    Mine(T),
    NotMine,
}

impl<T> Detection<T> {
    pub fn is_mine(&self) -> bool {
        matches!(self, Self::Mine(_))
    }

    pub fn mine(self) -> Option<T> {
        match self {
            Self::Mine(value) => Some(value),
            Self::NotMine => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Detection<U> {
        match self {
            Self::Mine(value) => Detection::Mine(f(value)),
            Self::NotMine => Detection::NotMine,
        }
    }
}

/// The 32-byte file header: `[magic:4][major:1][minor:1][reserved:26]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub major: u8,
    pub minor: u8,
}

impl FileHeader {
    pub const SIZE: usize = 32;
    pub const MAGIC: [u8; 4] = [0x0e, 0x00, 0x90, 0x9a];
    pub const MAGIC_SIZE: usize = 4;

    /// Extracts the version bytes. The magic is checked separately and the
    /// reserved tail is ignored.
    pub fn parse(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            major: buf[4],
            minor: buf[5],
        }
    }
}

/// State produced by a successful open: the parsed header and the first bunch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opened {
    pub header: FileHeader,
    pub bunch: BunchState,
}

/// Validates the file header at the current stream position and consumes the
/// first bunch-length prefix.
///
/// Fewer than four bytes or a wrong magic yields `NotMine`. Once the magic
/// matches, any failure to read the rest of the header or the first prefix is
/// a hard I/O error.
pub fn open_stream<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<Detection<Opened>> {
    let mut buf = [0u8; FileHeader::SIZE];

    match stream.read_exact(&mut buf[..FileHeader::MAGIC_SIZE]) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(Detection::NotMine),
        Err(e) => return Err(e.into()),
    }

    if buf[..FileHeader::MAGIC_SIZE] != FileHeader::MAGIC {
        return Ok(Detection::NotMine);
    }

    stream.read_exact(&mut buf[FileHeader::MAGIC_SIZE..])?;
    let header = FileHeader::parse(&buf);

    let mut len = [0u8; 4];
    stream.read_exact(&mut len)?;
    let first_bunch_len = u32::from_le_bytes(len);

    let bunch = BunchState::new(stream.stream_position()?, first_bunch_len);

    debug!(
        major = header.major,
        minor = header.minor,
        first_bunch_len,
        "Opened usbdump capture"
    );

    Ok(Detection::Mine(Opened { header, bunch }))
}
