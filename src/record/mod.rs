//! The structured log record consumed by formatters.
//!
//! A [`LogRecord`] is a read-only snapshot of one logging event. Formatters
//! consume it through the accessor methods and never mutate it, so the same
//! record may be formatted concurrently from many threads.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::Level;

#[cfg(feature = "serde")]
mod ser;

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// A mapped diagnostic context: string keys to nullable scalar values,
/// iterated in insertion order.
pub type ContextMap = IndexMap<String, Option<String>>;

/// One structured log record.
///
/// Records are created with [`LogRecord::new`] and refined with the `with_*`
/// builders. The sequence number is drawn from a process-wide monotonically
/// increasing counter at construction.
///
/// # Examples
///
/// ```
/// use recfmt::{Level, LogRecord, Thrown};
///
/// let record = LogRecord::new(Level::ERROR, "com.example.db", "connection lost")
///     .with_ndc("request-7")
///     .with_thrown(
///         Thrown::new("boom").with_frame("com.example.db.Pool", "acquire", Some(42)),
///     );
///
/// assert_eq!(record.level(), Level::ERROR);
/// assert_eq!(record.thrown().unwrap().message(), Some("boom"));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LogRecord {
    /// The severity the record was logged at.
    #[cfg_attr(feature = "serde", serde(serialize_with = "ser::level"))]
    pub(crate) level: Level,

    /// The raw message, or a printf-style template when parameters are set.
    pub(crate) message: String,

    /// The name of the logger that produced the record.
    pub(crate) logger: String,

    /// The name of the producing thread, when known.
    pub(crate) thread_name: Option<String>,

    /// When the record was created.
    #[cfg_attr(feature = "serde", serde(serialize_with = "ser::timestamp"))]
    pub(crate) timestamp: DateTime<Utc>,

    /// Process-wide monotonically increasing sequence number.
    pub(crate) sequence: u64,

    /// The thrown exception chain, when one accompanies the record.
    pub(crate) thrown: Option<Thrown>,

    /// Positional call parameters; slots may be absent.
    pub(crate) parameters: Option<Vec<Option<String>>>,

    /// Mapped diagnostic context, insertion-ordered.
    pub(crate) mdc: Option<ContextMap>,

    /// Nested diagnostic context.
    pub(crate) ndc: Option<String>,

    /// Where the record was produced, when captured.
    pub(crate) source: Option<SourceLocation>,
}

impl LogRecord {
    /// Returns a new record at `level` with the given logger name and
    /// message, stamped with the current time and the next sequence number.
    ///
    /// The thread name is captured from the calling thread when it has one.
    pub fn new(level: Level, logger: impl Into<String>, message: impl Into<String>) -> Self {
        LogRecord {
            level,
            message: message.into(),
            logger: logger.into(),
            thread_name: std::thread::current().name().map(str::to_owned),
            timestamp: Utc::now(),
            sequence: NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed),
            thrown: None,
            parameters: None,
            mdc: None,
            ndc: None,
            source: None,
        }
    }

    /// Attaches a thrown exception chain.
    pub fn with_thrown(mut self, thrown: Thrown) -> Self {
        self.thrown = Some(thrown);
        self
    }

    /// Attaches positional call parameters.
    pub fn with_parameters(mut self, parameters: Vec<Option<String>>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Attaches a mapped diagnostic context.
    pub fn with_mdc(mut self, mdc: ContextMap) -> Self {
        self.mdc = Some(mdc);
        self
    }

    /// Attaches a nested diagnostic context.
    pub fn with_ndc(mut self, ndc: impl Into<String>) -> Self {
        self.ndc = Some(ndc.into());
        self
    }

    /// Attaches the source location the record was produced at.
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    /// Overrides the captured thread name.
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = Some(thread_name.into());
        self
    }

    /// Overrides the creation timestamp, for replay and deterministic output.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Overrides the assigned sequence number, for replay and deterministic
    /// output.
    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Returns the record's severity level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the record's message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the logger that produced the record.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Returns the name of the producing thread, when known.
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    /// Returns when the record was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the creation time as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the record's sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the thrown exception chain, when one is attached.
    pub fn thrown(&self) -> Option<&Thrown> {
        self.thrown.as_ref()
    }

    /// Returns the positional call parameters, when attached.
    pub fn parameters(&self) -> Option<&[Option<String>]> {
        self.parameters.as_deref()
    }

    /// Returns the mapped diagnostic context, when attached.
    pub fn mdc(&self) -> Option<&ContextMap> {
        self.mdc.as_ref()
    }

    /// Returns the nested diagnostic context, when attached.
    pub fn ndc(&self) -> Option<&str> {
        self.ndc.as_deref()
    }

    /// Returns the source location, when captured.
    pub fn source(&self) -> Option<&SourceLocation> {
        self.source.as_ref()
    }
}

/// A thrown exception: a message, an ordered list of stack frames, and
/// optionally the exception that caused it, forming a linked chain.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Thrown {
    pub(crate) message: Option<String>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) cause: Option<Box<Thrown>>,
}

impl Thrown {
    /// Returns a new exception carrying `message` and no frames.
    pub fn new(message: impl Into<String>) -> Self {
        Thrown {
            message: Some(message.into()),
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Returns a new exception with no message and no frames.
    pub fn without_message() -> Self {
        Thrown {
            message: None,
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Appends a stack frame. Frames are ordered outermost call first.
    pub fn with_frame(
        mut self,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        line: Option<u32>,
    ) -> Self {
        self.frames.push(Frame {
            class_name: class_name.into(),
            method_name: method_name.into(),
            line,
        });
        self
    }

    /// Links the exception that caused this one.
    pub fn caused_by(mut self, cause: Thrown) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the exception's message, when it carries one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the stack frames, outermost call first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the cause, when the chain continues.
    pub fn cause(&self) -> Option<&Thrown> {
        self.cause.as_deref()
    }
}

/// One stack frame of a thrown exception.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Frame {
    pub(crate) class_name: String,
    pub(crate) method_name: String,
    /// `None` when the line number is unknown.
    pub(crate) line: Option<u32>,
}

impl Frame {
    /// Returns the class the frame executes in.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the method the frame executes in.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns the frame's line number, when known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

/// Where a record was produced.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SourceLocation {
    pub(crate) class_name: String,
    pub(crate) method_name: String,
    pub(crate) file_name: Option<String>,
    pub(crate) line: Option<u32>,
}

impl SourceLocation {
    /// Returns a new source location for `class_name::method_name`.
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        SourceLocation {
            class_name: class_name.into(),
            method_name: method_name.into(),
            file_name: None,
            line: None,
        }
    }

    /// Sets the file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Returns the class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the method name.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns the file name, when known.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Returns the line number, when known.
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let first = LogRecord::new(Level::INFO, "test", "one");
        let second = LogRecord::new(Level::INFO, "test", "two");
        assert!(second.sequence() > first.sequence());
    }

    #[test]
    fn timestamp_millis_matches_timestamp() {
        let record = LogRecord::new(Level::INFO, "test", "now");
        assert_eq!(
            record.timestamp_millis(),
            record.timestamp().timestamp_millis()
        );
    }

    #[test]
    fn cause_chain_links() {
        let thrown = Thrown::new("outer").caused_by(Thrown::new("inner"));
        assert_eq!(thrown.cause().unwrap().message(), Some("inner"));
        assert!(thrown.cause().unwrap().cause().is_none());
    }
}
