//! Per-record builders that map structured data onto a text format.
//!
//! See [`Generator`] for the builder contract.

use crate::cfg_json;
use crate::record::Thrown;
use indexmap::IndexMap;
use std::fmt::Display;
use std::io;

pub mod xml;
pub use xml::XmlGenerator;

cfg_json! {
    pub mod json;
    pub use json::JsonGenerator;
}

/// A stateful, single-use builder that renders one record.
///
/// A generator is created fresh for each record, driven through
/// `begin` → `add*` → `build` by one thread, and then discarded. Concrete
/// output formats each supply their own binding behind this trait.
///
/// # State machine
///
/// `begin` must be the first call and may only be made once. Every `add*`
/// call requires a prior `begin`. Violating the order is a programming
/// error and panics immediately rather than producing a malformed document.
/// `build` consumes the generator, so reuse after finishing is rejected at
/// compile time:
///
/// ```compile_fail
/// use recfmt::{Generator, XmlGenerator};
///
/// let mut gen = XmlGenerator::new(false);
/// gen.begin().unwrap();
/// let first = gen.build().unwrap();
/// let second = gen.build().unwrap(); // error: use of moved value
/// ```
///
/// # Null and absence
///
/// Three input states produce three distinct outputs:
///
/// * an absent array or mapping reference produces an empty element named
///   after the field key;
/// * a present-but-null scalar produces an empty leaf element;
/// * an empty string produces a non-empty leaf with zero-length content.
///
/// # Errors
///
/// `begin` and the `add*` operations propagate underlying writer failures.
/// A generator that has returned an error is in an indeterminate state and
/// must be discarded.
///
/// # Examples
///
/// ```
/// use recfmt::{Generator, XmlGenerator};
///
/// let mut gen = XmlGenerator::new(false);
/// gen.begin()?
///     .add("level", Some("INFO"))?
///     .add::<str>("ndc", None)?;
/// let xml = gen.build()?;
///
/// assert_eq!(xml, "<record><level>INFO</level><ndc/></record>");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait Generator: Sized {
    /// Opens the document root representing one record. Must be the first
    /// call, exactly once.
    fn begin(&mut self) -> io::Result<&mut Self>;

    /// Adds a scalar field. `None` produces an empty element; otherwise the
    /// value's canonical text form is emitted with format-reserved
    /// characters escaped by the underlying writer.
    fn add<V: Display + ?Sized>(&mut self, key: &str, value: Option<&V>) -> io::Result<&mut Self>;

    /// Adds a homogeneous array field. A `None` array produces an empty
    /// `key` element; otherwise each slot becomes an `element_key` child,
    /// empty for `None` slots, preserving array order exactly.
    fn add_array<V: Display>(
        &mut self,
        key: &str,
        element_key: &str,
        values: Option<&[Option<V>]>,
    ) -> io::Result<&mut Self>;

    /// Adds a string-keyed mapping field. A `None` mapping produces an
    /// empty `key` element; otherwise each entry becomes a child named
    /// after its key, following the scalar null rule, in insertion order.
    fn add_map<V: Display>(
        &mut self,
        key: &str,
        entries: Option<&IndexMap<String, Option<V>>>,
    ) -> io::Result<&mut Self>;

    /// Adds a thrown exception: its message, its stack frames outermost
    /// call first, and its cause chain recursing the same shape.
    fn add_stack_trace(&mut self, thrown: &Thrown) -> io::Result<&mut Self>;

    /// Closes the root, finalizes the underlying writer best-effort, and
    /// returns the accumulated text. Consumes the generator.
    fn build(self) -> io::Result<String>;
}
