//! Safe context serialization
//!
//! Renders structured context for file output as two-space-indented JSON
//! text. Rendering never fails: nesting beyond [`MAX_DEPTH`] is replaced
//! with the [`CIRCULAR_PLACEHOLDER`] token instead of recursing without
//! bound, and every scalar renders on a best-effort basis. Output for
//! values within the depth cap is byte-identical to
//! `serde_json::to_string_pretty`.

use serde_json::Value;

/// Placeholder substituted where the depth cap cuts off a nested value
pub const CIRCULAR_PLACEHOLDER: &str = "[Circular]";

/// Maximum container nesting depth rendered before substitution
pub const MAX_DEPTH: usize = 16;

const INDENT: &str = "  ";

/// Serialize a context value to indented JSON text
#[must_use]
pub fn serialize_context(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

/// Normalize an error value into `{name, message, stack}` context
///
/// `name` is the error's short type name, `message` its display form, and
/// `stack` the display form followed by the rendered `source()` chain.
pub fn error_details<E>(error: &E) -> Value
where
    E: std::error::Error + ?Sized,
{
    let name = short_type_name::<E>();
    let message = error.to_string();

    let mut stack = format!("{}: {}", name, message);
    let mut source = error.source();
    while let Some(cause) = source {
        stack.push_str("\n    caused by: ");
        stack.push_str(&cause.to_string());
        source = cause.source();
    }

    serde_json::json!({
        "name": name,
        "message": message,
        "stack": stack,
    })
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    if depth >= MAX_DEPTH && (value.is_array() || value.is_object()) {
        write_escaped(out, CIRCULAR_PLACEHOLDER);
        return;
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_escaped(out, s),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1);
            }
            out.push('\n');
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, depth + 1);
                write_escaped(out, key);
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            out.push('\n');
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                use std::fmt::Write as _;
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_serde_pretty_for_shallow_values() {
        let value = json!({
            "user": "u1",
            "attempts": 3,
            "tags": ["session", "login"],
            "nested": { "ok": true, "ratio": 0.5 },
            "none": null,
        });

        let expected = serde_json::to_string_pretty(&value).unwrap();
        assert_eq!(serialize_context(&value), expected);
    }

    #[test]
    fn test_string_escaping() {
        let value = json!({ "msg": "line1\nline2\t\"quoted\"" });
        let rendered = serialize_context(&value);
        assert!(rendered.contains("line1\\nline2\\t\\\"quoted\\\""));
    }

    #[test]
    fn test_depth_cap_substitutes_placeholder() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH + 4) {
            value = json!({ "inner": value });
        }

        let rendered = serialize_context(&value);
        assert!(rendered.contains(CIRCULAR_PLACEHOLDER));
        assert!(!rendered.contains("leaf"));
    }

    #[test]
    fn test_values_below_cap_render_fully() {
        let mut value = json!("leaf");
        for _ in 0..(MAX_DEPTH - 2) {
            value = json!([value]);
        }

        let rendered = serialize_context(&value);
        assert!(rendered.contains("leaf"));
        assert!(!rendered.contains(CIRCULAR_PLACEHOLDER));
    }

    #[test]
    fn test_error_details_fields() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = crate::core::error::LoggerError::io("opening", "app.log", io_err);

        let details = error_details(&err);
        assert_eq!(details["name"], "LoggerError");
        assert!(details["message"].as_str().unwrap().contains("opening"));
        let stack = details["stack"].as_str().unwrap();
        assert!(stack.starts_with("LoggerError: "));
        assert!(stack.contains("caused by: denied"));
    }
}
