use std::io::{self, Read};

/// Fills as much of `buf` as the stream allows and returns the byte count.
///
/// Unlike `read_exact`, a short count is not an error, so callers can tell a
/// clean end of file (`0`) apart from a record cut off midway.
pub(crate) fn read_full<R: Read + ?Sized>(stream: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
