// SPDX-License-Identifier: MIT OR Apache-2.0

//! A `LineBuffer` is just an ordered list of source lines. Ported from
//! `backend/generic/linebuffer.py`: deliberately simple, string-based
//! assembly rather than a structured AST, matching how every target
//! language provider emits text.

/// An ordered list of source lines, the unit every codegen helper in this
/// crate and the per-language providers pass around.
pub type LineBuffer = Vec<String>;

const INDENT: &str = "    ";

/// Indent every line of `lines` by `level` levels of four spaces.
#[must_use]
pub fn indent(lines: &LineBuffer, level: usize) -> LineBuffer {
    if level == 0 {
        return lines.clone();
    }
    let prefix = INDENT.repeat(level);
    lines.iter().map(|l| format!("{prefix}{l}")).collect()
}

/// Prefix every line of `lines` with a line-comment marker.
#[must_use]
pub fn comment(lines: &LineBuffer, marker: &str) -> LineBuffer {
    lines.iter().map(|l| format!("{marker} {l}")).collect()
}

/// Collapse a `LineBuffer` into a single newline-joined string.
#[must_use]
pub fn collapse(lines: &LineBuffer) -> String {
    lines.join("\n")
}

/// Split a string into a `LineBuffer`.
#[must_use]
pub fn expand(text: &str) -> LineBuffer {
    text.lines().map(str::to_string).collect()
}

/// Concatenate several buffers, optionally interspersing `separator`
/// between each pair.
#[must_use]
pub fn concat(buffers: &[LineBuffer], separator: Option<&LineBuffer>) -> LineBuffer {
    let mut out = LineBuffer::new();
    for (i, buf) in buffers.iter().enumerate() {
        if i > 0 {
            if let Some(sep) = separator {
                out.extend(sep.iter().cloned());
            }
        }
        out.extend(buf.iter().cloned());
    }
    out
}

/// Prepend `blanks` empty lines, unless `lines` is itself empty.
#[must_use]
pub fn blank_before(lines: &LineBuffer, blanks: usize) -> LineBuffer {
    if lines.is_empty() {
        return lines.clone();
    }
    let mut out = vec![String::new(); blanks];
    out.extend(lines.iter().cloned());
    out
}

/// Append `blanks` empty lines, unless `lines` is itself empty.
#[must_use]
pub fn blank_after(lines: &LineBuffer, blanks: usize) -> LineBuffer {
    if lines.is_empty() {
        return lines.clone();
    }
    let mut out = lines.clone();
    out.extend(std::iter::repeat(String::new()).take(blanks));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_prefixes_every_line() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(indent(&lines, 1), vec!["    a", "    b"]);
        assert_eq!(indent(&lines, 2), vec!["        a", "        b"]);
    }

    #[test]
    fn blank_before_skips_empty_input() {
        let empty: LineBuffer = vec![];
        assert!(blank_before(&empty, 2).is_empty());
    }

    #[test]
    fn concat_intersperses_separator() {
        let a = vec!["a".to_string()];
        let b = vec!["b".to_string()];
        let sep = vec![String::new()];
        assert_eq!(concat(&[a, b], Some(&sep)), vec!["a", "", "b"]);
    }
}
