//! Character-at-a-time UTF-8 decoding over a buffered byte source.

use std::io::{self, BufRead};
use thiserror::Error;

/// Errors produced while reading characters
#[derive(Debug, Error)]
pub enum ReadError {
    /// The bytes at the current position are not valid UTF-8. Only the
    /// listed bytes were consumed; reading can continue after them.
    #[error("Invalid UTF-8 sequence {bytes:02x?}")]
    InvalidUtf8 { bytes: Vec<u8> },

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Yields one `char` at a time from a `BufRead`.
///
/// Invalid sequences are reported as [`ReadError::InvalidUtf8`] without
/// ending the iteration, so the caller decides how to resynchronize.
///
/// # Example
///
/// ```rust
/// use reckon::repl::CharReader;
///
/// let input: &[u8] = b"a\xffb";
/// let decoded: Vec<bool> = CharReader::new(input).map(|c| c.is_ok()).collect();
/// assert_eq!(decoded, vec![true, false, true]);
/// ```
pub struct CharReader<R> {
    inner: R,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        let Some(lead) = self.peek_byte()? else {
            return Ok(None);
        };
        self.inner.consume(1);

        let width = sequence_width(lead);
        if width == 0 {
            return Err(ReadError::InvalidUtf8 { bytes: vec![lead] });
        }

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            match self.peek_byte()? {
                Some(next) if next & 0xC0 == 0x80 => {
                    bytes[len] = next;
                    self.inner.consume(1);
                    len += 1;
                }
                _ => {
                    return Err(ReadError::InvalidUtf8 {
                        bytes: bytes[..len].to_vec(),
                    })
                }
            }
        }

        match std::str::from_utf8(&bytes[..width]) {
            Ok(decoded) => Ok(decoded.chars().next()),
            Err(_) => Err(ReadError::InvalidUtf8 {
                bytes: bytes[..width].to_vec(),
            }),
        }
    }
}

impl<R: BufRead> Iterator for CharReader<R> {
    type Item = Result<char, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_char().transpose()
    }
}

/// Length of the sequence a lead byte announces, or 0 if it cannot start one.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
