//! Canonical indented textual rendering.
//!
//! The format is JSON-shaped: 4-space indentation per nesting level, one
//! element per line, a trailing comma after every element but the last.
//! Integral numbers render without a decimal point. Object keys render in
//! the object's (sorted) iteration order, so output is deterministic.

use std::fmt::{self, Write};

use crate::core::value::Value;

/// Characters that must be escaped inside a rendered string, and their
/// replacements. Process-lifetime, read-only.
const ESCAPE_MAPPING: &[(char, &str)] = &[
    ('\r', "\\r"),
    ('\n', "\\n"),
    ('\t', "\\t"),
    ('\\', "\\\\"),
    ('"', "\\\""),
    ('\u{2028}', "\\u2028"),
    ('\u{2029}', "\\u2029"),
];

fn escaped(c: char) -> Option<&'static str> {
    ESCAPE_MAPPING
        .iter()
        .find(|(raw, _)| *raw == c)
        .map(|(_, escape)| *escape)
}

fn write_escaped(f: &mut fmt::Formatter<'_>, source: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in source.chars() {
        match escaped(c) {
            Some(escape) => f.write_str(escape)?,
            None => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_str("    ")?;
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, level: usize) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(f, "{n}"),
        Value::Text(t) => write_escaped(f, t.as_str()),
        Value::Bytes(b) => write_escaped(f, &b.to_base64()),
        Value::Array(array) => {
            f.write_char('[')?;
            let last = array.len().checked_sub(1);
            for (index, element) in array.iter().enumerate() {
                f.write_char('\n')?;
                write_indent(f, level + 1)?;
                write_value(f, element, level + 1)?;
                if Some(index) != last {
                    f.write_char(',')?;
                }
            }
            f.write_char('\n')?;
            write_indent(f, level)?;
            f.write_char(']')
        }
        Value::Object(object) => {
            f.write_char('{')?;
            let last = object.len().checked_sub(1);
            for (index, (key, element)) in object.entries().enumerate() {
                f.write_char('\n')?;
                write_indent(f, level + 1)?;
                write_escaped(f, key)?;
                f.write_str(": ")?;
                write_value(f, element, level + 1)?;
                if Some(index) != last {
                    f.write_char(',')?;
                }
            }
            f.write_char('\n')?;
            write_indent(f, level)?;
            f.write_char('}')
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::boolean(false).to_string(), "false");
        assert_eq!(Value::int(42).to_string(), "42");
        assert_eq!(Value::number(3.25).to_string(), "3.25");
        assert_eq!(Value::text("plain").to_string(), "\"plain\"");
    }

    #[test]
    fn escape_table() {
        let text = Value::text("a\rb\nc\td\\e\"f\u{2028}g\u{2029}h");
        assert_eq!(
            text.to_string(),
            "\"a\\rb\\nc\\td\\\\e\\\"f\\u2028g\\u2029h\""
        );
    }

    #[test]
    fn array_indentation() {
        let value = Value::array(vec![Value::int(1), Value::text("two")]);
        assert_eq!(value.to_string(), "[\n    1,\n    \"two\"\n]");
    }

    #[test]
    fn nested_object_indentation() {
        let inner = Value::object(vec![("x".to_owned(), Value::int(1))]);
        let value = Value::object(vec![("nest".to_owned(), inner)]);
        assert_eq!(
            value.to_string(),
            "{\n    \"nest\": {\n        \"x\": 1\n    }\n}"
        );
    }

    #[test]
    fn keys_render_sorted() {
        let value = Value::object(vec![
            ("b".to_owned(), Value::int(2)),
            ("a".to_owned(), Value::int(1)),
        ]);
        assert_eq!(value.to_string(), "{\n    \"a\": 1,\n    \"b\": 2\n}");
    }

    #[test]
    fn bytes_render_as_base64_string() {
        let value = Value::bytes(vec![0xde, 0xad]);
        assert_eq!(value.to_string(), "\"3q0=\"");
    }
}
