//! A formatter that outputs records in JSON format.

use crate::formatter::{format_record, Formatter};
use crate::generator::JsonGenerator;
use crate::record::LogRecord;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Renders records as JSON objects.
///
/// Configuration behaves exactly as on [`XmlFormatter`]: the pretty flag is
/// snapshotted when each per-call generator is constructed.
///
/// # Examples
///
/// ```
/// use recfmt::{Formatter, JsonFormatter, Level, LogRecord};
///
/// let formatter = JsonFormatter::new(false);
/// let record = LogRecord::new(Level::INFO, "com.example", "ready");
///
/// let json = formatter.format(&record)?;
/// assert!(json.contains(r#""message":"ready""#));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// [`XmlFormatter`]: crate::formatter::XmlFormatter
pub struct JsonFormatter {
    pretty_print: AtomicBool,
    print_details: bool,
}

impl JsonFormatter {
    /// Returns a formatter with pretty printing off.
    pub fn new(print_details: bool) -> Self {
        JsonFormatter {
            pretty_print: AtomicBool::new(false),
            print_details,
        }
    }

    /// Indicates whether pretty printing is enabled.
    pub fn is_pretty_print(&self) -> bool {
        self.pretty_print.load(Ordering::Relaxed)
    }

    /// Turns pretty printing on or off.
    pub fn set_pretty_print(&self, pretty: bool) {
        self.pretty_print.store(pretty, Ordering::Relaxed);
    }

    /// Indicates whether source-location details are included.
    pub fn print_details(&self) -> bool {
        self.print_details
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        JsonFormatter::new(false)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> io::Result<String> {
        let generator = JsonGenerator::new(self.is_pretty_print());
        format_record(generator, record, self.print_details)
    }
}
