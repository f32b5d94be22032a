//! Render structured log records as self-describing text formats.
//!
//! # Overview
//!
//! Logging frameworks hand this crate one [`LogRecord`] at a time and get
//! back a complete, well-formed text fragment representing that record,
//! including nested structures for thrown-exception stack traces, key/value
//! diagnostic context, and positional call parameters.
//!
//! The crate is built around two small abstractions:
//!
//! * [`Generator`] — a per-record, stateful builder driven through
//!   `begin` → `add*` → `build`. Each concrete output format supplies its
//!   own binding: [`XmlGenerator`] streams XML over an in-memory
//!   [`StringSink`], and [`JsonGenerator`] (behind the `json` feature)
//!   assembles insertion-ordered JSON objects.
//! * [`Formatter`] — the outward-facing surface. A formatter owns the
//!   configuration (pretty printing, source-location details) and constructs
//!   one fresh generator per call, so concurrent formatting of different
//!   records never shares mutable state.
//!
//! # Getting started
//!
//! ```
//! use recfmt::{Formatter, Level, LogRecord, XmlFormatter};
//!
//! let record = LogRecord::new(Level::INFO, "com.example.app", "Hello, world!");
//!
//! let formatter = XmlFormatter::new(false);
//! let xml = formatter.format(&record).unwrap();
//!
//! assert!(xml.starts_with("<record>"));
//! assert!(xml.ends_with("</record>"));
//! assert!(xml.contains("<message>Hello, world!</message>"));
//! ```
//!
//! Pretty printing inserts insignificant whitespace between elements and
//! never changes element structure or character content:
//!
//! ```
//! use recfmt::{Formatter, Level, LogRecord, XmlFormatter};
//!
//! let record = LogRecord::new(Level::WARN, "com.example.app", "look out");
//!
//! let formatter = XmlFormatter::new(false);
//! formatter.set_pretty_print(true);
//!
//! let xml = formatter.format(&record).unwrap();
//! assert!(xml.contains("\n    <message>look out</message>"));
//! ```
//!
//! # Feature flags
//!
//! * `json`: Enables [`JsonGenerator`] and [`JsonFormatter`], along with
//!   `Serialize` implementations on the record model.
//! * `full`: Enables all features above.

mod cfg;
mod fail;

pub mod formatter;
pub mod generator;
pub mod keys;
pub mod record;
pub mod sink;

pub use formatter::{Formatter, XmlFormatter};
pub use generator::{Generator, XmlGenerator};
pub use record::{ContextMap, Frame, LogRecord, SourceLocation, Thrown};
pub use sink::StringSink;

cfg_json! {
    pub use formatter::JsonFormatter;
    pub use generator::JsonGenerator;
}

/// The severity vocabulary of a [`LogRecord`], re-exported from [`tracing`].
pub use tracing::Level;
