//! Reader and writer for the flat `key=value` text format.
//!
//! Accepts the conventional properties syntax: `#`/`!` comments, `=`, `:` or
//! whitespace separators, backslash line continuations, and `\uXXXX`
//! escapes. Lines end at `\n`, `\r\n` or a lone `\r`. Input is read as
//! UTF-8; bytes that are not valid UTF-8 are decoded as ISO-8859-1 instead,
//! so Latin-1 files written for other properties readers load unchanged.

use super::PropertySet;
use crate::error::PropertyError;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Read the whole stream and parse it. `source_name` labels errors.
///
/// The stream is consumed by value and dropped before this returns, on
/// success and on every error path.
pub fn read_properties<R: Read>(mut reader: R, source_name: &str) -> Result<PropertySet, PropertyError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| PropertyError::Io {
            path: PathBuf::from(source_name),
            source: e,
        })?;
    drop(reader);

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(source = source_name, "Input is not UTF-8, decoding as ISO-8859-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    };

    parse_properties(&text, source_name)
}

/// Parse properties text that is already in memory.
pub fn parse_properties(text: &str, source_name: &str) -> Result<PropertySet, PropertyError> {
    let mut props = PropertySet::new();
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut physical = normalized.split('\n').enumerate();

    while let Some((idx, raw)) = physical.next() {
        let line_no = idx + 1;
        let trimmed = raw.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while continues(&logical) {
            logical.pop();
            match physical.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical, source_name, line_no)?;
        props.set(key, value);
    }

    Ok(props)
}

/// Write `props` as sorted `key=value` lines.
pub fn write_properties<W: Write>(props: &PropertySet, mut writer: W) -> std::io::Result<()> {
    for (key, value) in props.iter() {
        writeln!(writer, "{}={}", escape(key, true), escape(value, false))?;
    }
    writer.flush()
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

/// An odd number of trailing backslashes joins the next physical line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(
    line: &str,
    source_name: &str,
    line_no: usize,
) -> Result<(String, String), PropertyError> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let mut key_end = len;
    let mut value_start = len;
    let mut explicit_separator = false;
    let mut i = 0;
    while i < len {
        let c = chars[i];
        if c == '\\' {
            i += 2;
            continue;
        }
        if c == '=' || c == ':' {
            key_end = i;
            value_start = i + 1;
            explicit_separator = true;
            break;
        }
        if is_blank(c) {
            key_end = i;
            value_start = i + 1;
            break;
        }
        i += 1;
    }

    let mut j = value_start;
    while j < len && is_blank(chars[j]) {
        j += 1;
    }
    if !explicit_separator && j < len && (chars[j] == '=' || chars[j] == ':') {
        j += 1;
        while j < len && is_blank(chars[j]) {
            j += 1;
        }
    }

    let key = unescape(&chars[..key_end], source_name, line_no)?;
    let value = unescape(&chars[j.min(len)..], source_name, line_no)?;
    Ok((key, value))
}

fn unescape(chars: &[char], source_name: &str, line_no: usize) -> Result<String, PropertyError> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&escaped) = chars.get(i) else {
            break;
        };
        i += 1;
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0c'),
            'u' => {
                let unit = hex_unit(chars, i, source_name, line_no)?;
                i += 4;
                let code = if (0xD800..0xDC00).contains(&unit) {
                    let low = if chars.get(i) == Some(&'\\') && chars.get(i + 1) == Some(&'u') {
                        hex_unit(chars, i + 2, source_name, line_no)?
                    } else {
                        return Err(malformed(source_name, line_no, "unpaired surrogate in \\u escape"));
                    };
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(malformed(source_name, line_no, "unpaired surrogate in \\u escape"));
                    }
                    i += 6;
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let decoded = char::from_u32(code)
                    .ok_or_else(|| malformed(source_name, line_no, "invalid \\u escape"))?;
                out.push(decoded);
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

fn hex_unit(chars: &[char], at: usize, source_name: &str, line_no: usize) -> Result<u32, PropertyError> {
    let digits: String = chars.iter().skip(at).take(4).collect();
    if digits.chars().count() != 4 {
        return Err(malformed(source_name, line_no, "truncated \\u escape"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed(
            source_name,
            line_no,
            &format!("malformed \\u escape '\\u{}'", digits),
        ));
    }
    u32::from_str_radix(&digits, 16)
        .map_err(|_| malformed(source_name, line_no, &format!("malformed \\u escape '\\u{}'", digits)))
}

fn malformed(source_name: &str, line: usize, reason: &str) -> PropertyError {
    PropertyError::Malformed {
        source_name: source_name.to_string(),
        line,
        reason: reason.to_string(),
    }
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            ' ' if is_key || idx == 0 => out.push_str("\\ "),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if idx == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
