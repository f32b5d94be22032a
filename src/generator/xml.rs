//! The XML realization of the [`Generator`] contract.

use crate::fail;
use crate::generator::Generator;
use crate::keys;
use crate::record::Thrown;
use crate::sink::StringSink;
use indexmap::IndexMap;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::io::{self, Write};

/// Builds one record as an XML document over an in-memory [`StringSink`].
///
/// The pretty flag is snapshotted at construction and selects whether the
/// streaming writer runs in indenting mode. Indentation only inserts
/// insignificant whitespace between elements; element structure and
/// character content are identical either way.
///
/// Empty elements use the self-closing form (`<key/>`); non-empty elements
/// use matched start/end pairs with reserved characters escaped.
///
/// # Examples
///
/// ```
/// use recfmt::{Generator, Thrown, XmlGenerator};
///
/// let thrown = Thrown::new("boom").with_frame("C", "m", Some(42));
///
/// let mut gen = XmlGenerator::new(false);
/// gen.begin()?.add_stack_trace(&thrown)?;
/// let xml = gen.build()?;
///
/// assert!(xml.contains("<EXCEPTION_FRAME_LINE>42</EXCEPTION_FRAME_LINE>"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct XmlGenerator {
    writer: Writer<StringSink>,
    open: Vec<String>,
    begun: bool,
}

impl XmlGenerator {
    /// Returns a generator over a fresh sink, indenting when `pretty` is set.
    pub fn new(pretty: bool) -> Self {
        let sink = StringSink::new();
        let writer = if pretty {
            Writer::new_with_indent(sink, b' ', 4)
        } else {
            Writer::new(sink)
        };
        XmlGenerator {
            writer,
            open: Vec::new(),
            begun: false,
        }
    }

    fn check_begun(&self) {
        if !self.begun {
            fail::add_before_begin()
        }
    }

    // Single seam for writer failures.
    fn emit(&mut self, event: Event) -> io::Result<()> {
        self.writer
            .write_event(event)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    }

    fn write_start(&mut self, name: &str) -> io::Result<()> {
        self.emit(Event::Start(BytesStart::new(name)))?;
        self.open.push(name.to_owned());
        Ok(())
    }

    fn write_end(&mut self) -> io::Result<()> {
        let name = match self.open.pop() {
            Some(name) => name,
            None => fail::unbalanced_build(0),
        };
        self.emit(Event::End(BytesEnd::new(name.as_str())))
    }

    fn write_empty(&mut self, name: &str) -> io::Result<()> {
        self.emit(Event::Empty(BytesStart::new(name)))
    }

    fn write_scalar<V: Display + ?Sized>(
        &mut self,
        key: &str,
        value: Option<&V>,
    ) -> io::Result<()> {
        match value {
            None => self.write_empty(key),
            Some(value) => {
                self.write_start(key)?;
                self.emit(Event::Text(BytesText::new(&value.to_string())))?;
                self.write_end()
            }
        }
    }

    fn write_thrown(&mut self, thrown: &Thrown) -> io::Result<()> {
        self.write_start(keys::EXCEPTION)?;
        self.write_scalar(keys::EXCEPTION_MESSAGE, thrown.message())?;

        for frame in thrown.frames() {
            self.write_start(keys::EXCEPTION_FRAME)?;
            self.write_scalar(keys::EXCEPTION_FRAME_CLASS, Some(frame.class_name()))?;
            self.write_scalar(keys::EXCEPTION_FRAME_METHOD, Some(frame.method_name()))?;
            // Unknown line numbers are omitted entirely, not emitted empty.
            if let Some(line) = frame.line() {
                self.write_scalar(keys::EXCEPTION_FRAME_LINE, Some(&line))?;
            }
            self.write_end()?;
        }

        if let Some(cause) = thrown.cause() {
            self.write_start(keys::EXCEPTION_CAUSED_BY)?;
            self.write_thrown(cause)?;
            self.write_end()?;
        }

        self.write_end()
    }
}

impl Generator for XmlGenerator {
    fn begin(&mut self) -> io::Result<&mut Self> {
        if self.begun {
            fail::begin_after_begin()
        }
        self.begun = true;
        self.write_start(keys::RECORD)?;
        Ok(self)
    }

    fn add<V: Display + ?Sized>(&mut self, key: &str, value: Option<&V>) -> io::Result<&mut Self> {
        self.check_begun();
        self.write_scalar(key, value)?;
        Ok(self)
    }

    fn add_array<V: Display>(
        &mut self,
        key: &str,
        element_key: &str,
        values: Option<&[Option<V>]>,
    ) -> io::Result<&mut Self> {
        self.check_begun();
        match values {
            None => self.write_empty(key)?,
            Some(values) => {
                self.write_start(key)?;
                for value in values {
                    self.write_scalar(element_key, value.as_ref())?;
                }
                self.write_end()?;
            }
        }
        Ok(self)
    }

    fn add_map<V: Display>(
        &mut self,
        key: &str,
        entries: Option<&IndexMap<String, Option<V>>>,
    ) -> io::Result<&mut Self> {
        self.check_begun();
        match entries {
            None => self.write_empty(key)?,
            Some(entries) => {
                self.write_start(key)?;
                for (entry_key, value) in entries {
                    self.write_scalar(entry_key, value.as_ref())?;
                }
                self.write_end()?;
            }
        }
        Ok(self)
    }

    fn add_stack_trace(&mut self, thrown: &Thrown) -> io::Result<&mut Self> {
        self.check_begun();
        self.write_thrown(thrown)?;
        Ok(self)
    }

    fn build(mut self) -> io::Result<String> {
        if self.open.len() != 1 {
            fail::unbalanced_build(self.open.len())
        }
        self.write_end()?;
        // Best-effort finalization: the sink has no external resource, so
        // the flush result is deliberately discarded and the already-built
        // document is returned intact.
        let _ = self.writer.get_mut().flush();
        Ok(self.writer.into_inner().into_string())
    }
}
