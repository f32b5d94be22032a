//! Formatters that turn one [`LogRecord`] into one text fragment.
//!
//! See [`Formatter`] for more details.

use crate::cfg_json;
use crate::generator::Generator;
use crate::keys;
use crate::record::LogRecord;
use std::io;

pub mod xml;
pub use xml::XmlFormatter;

cfg_json! {
    pub mod json;
    pub use json::JsonFormatter;
}

/// A type that renders a [`LogRecord`] into a complete text fragment.
///
/// Each `format` call is independent: a fresh generator/sink pair is
/// constructed per call and discarded afterwards, so one formatter instance
/// may serve many threads concurrently. The only state retained across
/// calls is the formatter's own configuration.
///
/// # Errors
///
/// A failure while emitting a field surfaces here; the caller decides
/// whether to drop the record, fall back to a simpler format, or propagate.
pub trait Formatter {
    /// Renders `record` into a complete text fragment.
    fn format(&self, record: &LogRecord) -> io::Result<String>;
}

/// Drives a fresh generator through the full field order for one record.
///
/// Source-location fields are only emitted when `details` is set and the
/// record carries a location; the stack trace only when an exception is
/// attached.
pub(crate) fn format_record<G: Generator>(
    mut generator: G,
    record: &LogRecord,
    details: bool,
) -> io::Result<String> {
    generator.begin()?;

    let sequence = record.sequence();
    generator
        .add(keys::SEQUENCE, Some(&sequence))?
        .add(keys::TIMESTAMP, Some(&record.timestamp().to_rfc3339()))?
        .add(keys::LEVEL, Some(&record.level()))?
        .add(keys::LOGGER_NAME, Some(record.logger()))?
        .add(keys::THREAD_NAME, record.thread_name())?
        .add(keys::MESSAGE, Some(record.message()))?
        .add_array(keys::PARAMETERS, keys::PARAMETER, record.parameters())?
        .add_map(keys::MDC, record.mdc())?
        .add(keys::NDC, record.ndc())?;

    if details {
        if let Some(source) = record.source() {
            generator
                .add(keys::SOURCE_CLASS_NAME, Some(source.class_name()))?
                .add(keys::SOURCE_FILE_NAME, source.file_name())?
                .add(keys::SOURCE_METHOD_NAME, Some(source.method_name()))?;
            let line = source.line();
            generator.add(keys::SOURCE_LINE_NUMBER, line.as_ref())?;
        }
    }

    if let Some(thrown) = record.thrown() {
        generator.add_stack_trace(thrown)?;
    }

    generator.build()
}
