//! The closed vocabulary of element names used when rendering records.
//!
//! Generators accept caller-supplied keys for ordinary fields; the constants
//! here are the names the crate itself reserves. Every name must be a valid
//! element-name token in the target format. That is the caller's contract
//! and is not validated by the generators.

/// The root element wrapping one record.
pub const RECORD: &str = "record";

/// Container for a thrown exception.
pub const EXCEPTION: &str = "EXCEPTION";

/// The exception's message, possibly empty.
pub const EXCEPTION_MESSAGE: &str = "EXCEPTION_MESSAGE";

/// One stack frame, outermost call first.
pub const EXCEPTION_FRAME: &str = "EXCEPTION_FRAME";

/// The class that a stack frame executes in.
pub const EXCEPTION_FRAME_CLASS: &str = "EXCEPTION_FRAME_CLASS";

/// The method that a stack frame executes in.
pub const EXCEPTION_FRAME_METHOD: &str = "EXCEPTION_FRAME_METHOD";

/// The line number of a stack frame, omitted entirely when unknown.
pub const EXCEPTION_FRAME_LINE: &str = "EXCEPTION_FRAME_LINE";

/// Container for the cause of an exception, recursing the exception shape.
pub const EXCEPTION_CAUSED_BY: &str = "EXCEPTION_CAUSED_BY";

/// The record's monotonically increasing sequence number.
pub const SEQUENCE: &str = "sequence";

/// The record's timestamp, rendered RFC 3339.
pub const TIMESTAMP: &str = "timestamp";

/// The record's severity level.
pub const LEVEL: &str = "level";

/// The name of the logger that produced the record.
pub const LOGGER_NAME: &str = "loggerName";

/// The name of the thread that produced the record.
pub const THREAD_NAME: &str = "threadName";

/// The record's message.
pub const MESSAGE: &str = "message";

/// Container for positional call parameters.
pub const PARAMETERS: &str = "parameters";

/// One positional call parameter.
pub const PARAMETER: &str = "parameter";

/// Container for the mapped diagnostic context.
pub const MDC: &str = "mdc";

/// The nested diagnostic context.
pub const NDC: &str = "ndc";

/// Source location: class name.
pub const SOURCE_CLASS_NAME: &str = "sourceClassName";

/// Source location: file name.
pub const SOURCE_FILE_NAME: &str = "sourceFileName";

/// Source location: method name.
pub const SOURCE_METHOD_NAME: &str = "sourceMethodName";

/// Source location: line number.
pub const SOURCE_LINE_NUMBER: &str = "sourceLineNumber";
