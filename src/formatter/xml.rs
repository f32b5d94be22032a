//! A formatter that outputs records in XML format.

use crate::formatter::{format_record, Formatter};
use crate::generator::XmlGenerator;
use crate::record::LogRecord;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Renders records as XML documents with a single `record` root element.
///
/// When `print_details` is set, the record's source location (class, file,
/// method, line) is included.
///
/// The pretty-print flag may be toggled at any time from any thread. It is
/// read once when each per-call generator is constructed, so a concurrent
/// toggle affects only calls that start afterwards; there is no atomicity
/// guarantee across multiple formatter properties.
///
/// # Examples
///
/// ```
/// use recfmt::{Formatter, Level, LogRecord, XmlFormatter};
///
/// let formatter = XmlFormatter::new(false);
/// let record = LogRecord::new(Level::INFO, "com.example", "ready");
///
/// let compact = formatter.format(&record)?;
/// formatter.set_pretty_print(true);
/// let pretty = formatter.format(&record)?;
///
/// assert!(!compact.contains('\n'));
/// assert!(pretty.contains('\n'));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct XmlFormatter {
    pretty_print: AtomicBool,
    print_details: bool,
}

impl XmlFormatter {
    /// Returns a formatter with pretty printing off.
    pub fn new(print_details: bool) -> Self {
        XmlFormatter {
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

impl Default for XmlFormatter {
    fn default() -> Self {
        XmlFormatter::new(false)
    }
}

impl Formatter for XmlFormatter {
    fn format(&self, record: &LogRecord) -> io::Result<String> {
        // Snapshot the flag once; the generator never re-reads it mid-build.
        let generator = XmlGenerator::new(self.is_pretty_print());
        format_record(generator, record, self.print_details)
    }
}
