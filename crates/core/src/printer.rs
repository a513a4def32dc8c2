//! Value tree to text, in compact or indented form.

use std::fmt::Write as _;

use crate::lexer::is_bare_key_char;
use crate::value::Value;

/// Whitespace-free text.
pub fn print_compact(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, None, 0);
    out
}

/// One member or element per line, `indent` spaces per nesting level,
/// terminated by a newline.
pub fn print_pretty(value: &Value, indent: u8) -> String {
    let mut out = String::new();
    write_value(&mut out, value, Some(indent as usize), 0);
    out.push('\n');
    out
}

fn write_value(out: &mut String, value: &Value, indent: Option<usize>, depth: usize) {
    match value {
        Value::Array(items) => {
            write_container(out, '[', ']', items.len(), indent, depth, |out, i| {
                write_value(out, &items[i], indent, depth + 1);
            });
        }
        Value::Object(obj) => {
            let entries: Vec<_> = obj.iter().collect();
            write_container(out, '{', '}', entries.len(), indent, depth, |out, i| {
                let (key, v) = entries[i];
                write_key(out, key);
                write_value(out, v, indent, depth + 1);
            });
        }
        leaf => write_leaf(out, leaf),
    }
}

fn write_container(
    out: &mut String,
    open: char,
    close: char,
    len: usize,
    indent: Option<usize>,
    depth: usize,
    mut child: impl FnMut(&mut String, usize),
) {
    out.push(open);
    if len == 0 {
        out.push(close);
        return;
    }
    for i in 0..len {
        if let Some(width) = indent {
            out.push('\n');
            push_spaces(out, width * (depth + 1));
        }
        child(out, i);
    }
    if let Some(width) = indent {
        out.push('\n');
        push_spaces(out, width * depth);
    }
    out.push(close);
}

fn push_spaces(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

fn write_leaf(out: &mut String, value: &Value) {
    out.push('<');
    out.push_str(value.type_tag().as_str());
    out.push_str(">(");
    // Writing into a String cannot fail.
    let _ = match value {
        Value::I8(n) => write!(out, "{}", n),
        Value::I16(n) => write!(out, "{}", n),
        Value::I32(n) => write!(out, "{}", n),
        Value::I64(n) => write!(out, "{}", n),
        Value::U8(n) => write!(out, "{}", n),
        Value::U16(n) => write!(out, "{}", n),
        Value::U32(n) => write!(out, "{}", n),
        Value::U64(n) => write!(out, "{}", n),
        Value::F32(f) => write!(out, "{}", f),
        Value::F64(f) => write!(out, "{}", f),
        Value::Str(s) => {
            escape_into(out, s.as_str(), ')');
            Ok(())
        }
        Value::Bool(b) => write!(out, "{}", if *b { 't' } else { 'f' }),
        Value::Null | Value::Array(_) | Value::Object(_) => Ok(()),
    };
    out.push(')');
}

fn write_key(out: &mut String, key: &str) {
    if !key.is_empty() && key.chars().all(is_bare_key_char) {
        out.push_str(key);
    } else {
        out.push('"');
        escape_into(out, key, '"');
        out.push('"');
    }
}

/// Escape backslashes, the context's closing delimiter and control
/// characters.
fn escape_into(out: &mut String, text: &str, closer: char) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == closer => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
}
