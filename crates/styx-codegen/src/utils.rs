// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small text-shaping helpers shared by every language provider, ported
//! from `backend/generic/utils.py`.

use styx_ir::{Param, ParamBody};

/// Wrap `s` in `quote` on both sides.
#[must_use]
pub fn enquote(s: &str, quote: char) -> String {
    format!("{quote}{s}{quote}")
}

/// Wrap `s` in a matching brace pair, given the opening character.
#[must_use]
pub fn enbrace(s: &str, open: char) -> String {
    let close = match open {
        '{' => '}',
        '[' => ']',
        '(' => ')',
        other => other,
    };
    format!("{open}{s}{close}")
}

/// Break `text` into lines no wider than `width`, splitting at word
/// boundaries only (a single word longer than `width` is kept whole).
#[must_use]
pub fn linebreak_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    lines.push(line);
    lines
}

/// Break a (possibly multi-line) paragraph into word-wrapped lines, with
/// the first source line wrapped to `first_line_width` and the rest to
/// `width`.
#[must_use]
pub fn linebreak_paragraph(text: &str, width: usize, first_line_width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let w = if i == 0 { first_line_width } else { width };
        out.extend(linebreak_line(line, w));
    }
    out
}

/// Append `suffix` to `text` unless it is already present.
#[must_use]
pub fn ensure_endswith(text: &str, suffix: &str) -> String {
    if text.ends_with(suffix) {
        text.to_string()
    } else {
        format!("{text}{suffix}")
    }
}

/// Double every backslash in `s`.
#[must_use]
pub fn escape_backslash(s: &str) -> String {
    s.replace('\\', "\\\\")
}

/// `true` if `struct_param`'s `Struct` body, or any descendant struct
/// reachable through it, declares at least one output.
#[must_use]
pub fn struct_has_outputs(struct_param: &Param) -> bool {
    if !struct_param.base.outputs.is_empty() {
        return true;
    }
    let ParamBody::Struct { children, .. } = &struct_param.body else {
        return false;
    };
    for child in children {
        match &child.body {
            ParamBody::Struct { .. } => {
                if struct_has_outputs(child) {
                    return true;
                }
            }
            ParamBody::StructUnion { alts } => {
                if alts.iter().any(struct_has_outputs) {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linebreak_respects_width() {
        let lines = linebreak_line("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn ensure_endswith_is_idempotent() {
        assert_eq!(ensure_endswith("foo", ".py"), "foo.py");
        assert_eq!(ensure_endswith("foo.py", ".py"), "foo.py");
    }
}
