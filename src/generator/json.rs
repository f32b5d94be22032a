//! The JSON realization of the [`Generator`] contract.

use crate::fail;
use crate::generator::Generator;
use crate::keys;
use crate::record::Thrown;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::io;

/// Builds one record as a JSON object.
///
/// The structural mapping mirrors the XML binding: scalar fields become
/// string members, `None` scalars become JSON `null`, arrays become JSON
/// arrays, mappings become nested objects in insertion order, and a thrown
/// exception becomes an object whose frames form an array. The pretty flag
/// is snapshotted at construction, as with [`XmlGenerator`].
///
/// # Examples
///
/// ```
/// use recfmt::{Generator, JsonGenerator};
///
/// let mut gen = JsonGenerator::new(false);
/// gen.begin()?
///     .add("level", Some("INFO"))?
///     .add::<str>("ndc", None)?;
/// let json = gen.build()?;
///
/// assert_eq!(json, r#"{"level":"INFO","ndc":null}"#);
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// [`XmlGenerator`]: crate::generator::XmlGenerator
pub struct JsonGenerator {
    pretty: bool,
    record: Map<String, Value>,
    begun: bool,
}

impl JsonGenerator {
    /// Returns a generator producing pretty or compact JSON.
    pub fn new(pretty: bool) -> Self {
        JsonGenerator {
            pretty,
            record: Map::new(),
            begun: false,
        }
    }

    fn check_begun(&self) {
        if !self.begun {
            fail::add_before_begin()
        }
    }

    fn scalar<V: Display + ?Sized>(value: Option<&V>) -> Value {
        match value {
            None => Value::Null,
            Some(value) => Value::String(value.to_string()),
        }
    }

    fn thrown_value(thrown: &Thrown) -> Value {
        let mut exception = Map::new();
        exception.insert(
            keys::EXCEPTION_MESSAGE.to_owned(),
            Self::scalar(thrown.message()),
        );

        let frames = thrown
            .frames()
            .iter()
            .map(|frame| {
                let mut entry = Map::new();
                entry.insert(
                    keys::EXCEPTION_FRAME_CLASS.to_owned(),
                    Self::scalar(Some(frame.class_name())),
                );
                entry.insert(
                    keys::EXCEPTION_FRAME_METHOD.to_owned(),
                    Self::scalar(Some(frame.method_name())),
                );
                if let Some(line) = frame.line() {
                    entry.insert(keys::EXCEPTION_FRAME_LINE.to_owned(), Self::scalar(Some(&line)));
                }
                Value::Object(entry)
            })
            .collect();
        exception.insert(keys::EXCEPTION_FRAME.to_owned(), Value::Array(frames));

        if let Some(cause) = thrown.cause() {
            exception.insert(
                keys::EXCEPTION_CAUSED_BY.to_owned(),
                Self::thrown_value(cause),
            );
        }

        Value::Object(exception)
    }
}

impl Generator for JsonGenerator {
    fn begin(&mut self) -> io::Result<&mut Self> {
        if self.begun {
            fail::begin_after_begin()
        }
        self.begun = true;
        Ok(self)
    }

    fn add<V: Display + ?Sized>(&mut self, key: &str, value: Option<&V>) -> io::Result<&mut Self> {
        self.check_begun();
        self.record.insert(key.to_owned(), Self::scalar(value));
        Ok(self)
    }

    fn add_array<V: Display>(
        &mut self,
        key: &str,
        _element_key: &str,
        values: Option<&[Option<V>]>,
    ) -> io::Result<&mut Self> {
        self.check_begun();
        let value = match values {
            None => Value::Null,
            Some(values) => Value::Array(
                values
                    .iter()
                    .map(|value| Self::scalar(value.as_ref()))
                    .collect(),
            ),
        };
        self.record.insert(key.to_owned(), value);
        Ok(self)
    }

    fn add_map<V: Display>(
        &mut self,
        key: &str,
        entries: Option<&IndexMap<String, Option<V>>>,
    ) -> io::Result<&mut Self> {
        self.check_begun();
        let value = match entries {
            None => Value::Null,
            Some(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(entry_key, value)| (entry_key.clone(), Self::scalar(value.as_ref())))
                    .collect(),
            ),
        };
        self.record.insert(key.to_owned(), value);
        Ok(self)
    }

    fn add_stack_trace(&mut self, thrown: &Thrown) -> io::Result<&mut Self> {
        self.check_begun();
        self.record
            .insert(keys::EXCEPTION.to_owned(), Self::thrown_value(thrown));
        Ok(self)
    }

    fn build(self) -> io::Result<String> {
        if !self.begun {
            fail::unbalanced_build(0)
        }
        let root = Value::Object(self.record);
        let text = if self.pretty {
            serde_json::to_string_pretty(&root)?
        } else {
            serde_json::to_string(&root)?
        };
        Ok(text)
    }
}
