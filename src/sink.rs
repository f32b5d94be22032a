//! An in-memory character sink for generators to write into.

use std::fmt;
use std::io;
use std::ops::Range;

/// A growable in-memory text sink.
///
/// Everything written is appended verbatim; escaping is the markup writer's
/// responsibility, never the sink's. The accumulated text can be inspected
/// at any time without consuming the buffer, and flushing is a no-op since
/// there is no underlying external resource.
///
/// This is not thread safe: a sink belongs to exactly one generator, which
/// is driven end-to-end by one thread.
///
/// # Examples
///
/// ```
/// use recfmt::StringSink;
///
/// let mut sink = StringSink::new();
/// sink.append('<').append_str("record").append('>');
///
/// assert_eq!(sink.contents(), "<record>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringSink {
    buf: String,
}

impl StringSink {
    /// Returns a new sink with a small default capacity.
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    /// Returns a new sink with the given capacity hint.
    ///
    /// The hint only affects performance, never correctness.
    pub fn with_capacity(capacity: usize) -> Self {
        StringSink {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends one character, returning the sink for chaining.
    pub fn append(&mut self, c: char) -> &mut Self {
        self.buf.push(c);
        self
    }

    /// Appends a string, returning the sink for chaining.
    pub fn append_str(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Appends the `range` slice of `s`, returning the sink for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or does not fall on character
    /// boundaries of `s`.
    pub fn append_range(&mut self, s: &str, range: Range<usize>) -> &mut Self {
        self.buf.push_str(&s[range]);
        self
    }

    /// Returns the accumulated text without consuming the buffer.
    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Consumes the sink, returning the accumulated text.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Returns the accumulated length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl fmt::Write for StringSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.buf.push(c);
        Ok(())
    }
}

impl fmt::Display for StringSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.buf)
    }
}

/// Byte-oriented access for markup writers. Chunks must be valid UTF-8;
/// anything else is rejected with [`io::ErrorKind::InvalidData`].
impl io::Write for StringSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = std::str::from_utf8(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.buf.push_str(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // No external resource to flush.
        Ok(())
    }
}
