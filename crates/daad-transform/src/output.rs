//! # JSON Output
//!
//! Writes the normalized collection as indented JSON. With
//! [`OutputOptions::ensure_ascii`] set, every non-ASCII character is
//! written as a lower-case `\uXXXX` escape, and characters outside the
//! Basic Multilingual Plane as a UTF-16 surrogate pair
//! (`"€500"` becomes `"\u20ac500"`). The document still parses to the same
//! values either way.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::config::OutputOptions;

/// Pretty formatter that can additionally escape non-ASCII characters.
pub struct CourseFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    ensure_ascii: bool,
}

impl<'a> CourseFormatter<'a> {
    /// Indent with `indent` (usually a run of spaces).
    pub fn new(indent: &'a [u8], ensure_ascii: bool) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
            ensure_ascii,
        }
    }
}

impl Formatter for CourseFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ensure_ascii || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        let mut ascii_start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[ascii_start..i])?;
            for unit in c.encode_utf16(&mut units) {
                writer.write_all(format!("\\u{unit:04x}").as_bytes())?;
            }
            ascii_start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[ascii_start..])
    }
}

/// Serialize `value` to `writer` using `options`.
pub fn write_json<W, T>(writer: W, value: &T, options: &OutputOptions) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let indent = vec![b' '; options.indent];
    let formatter = CourseFormatter::new(&indent, options.ensure_ascii);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

/// Serialize `value` to a `String` using `options`.
pub fn to_json_string<T>(value: &T, options: &OutputOptions) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    write_json(&mut buf, value, options)?;
    // The formatter only ever writes UTF-8.
    String::from_utf8(buf).map_err(|e| serde::ser::Error::custom(e.to_string()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    proptest! {
        /// ASCII mode output is pure ASCII and parses back to the input.
        #[test]
        fn ascii_output_parses_back(s in any::<String>()) {
            let value = Value::String(s);
            let out = to_json_string(&value, &OutputOptions::default()).unwrap();
            prop_assert!(out.is_ascii());
            let parsed: Value = serde_json::from_str(&out).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }
}
