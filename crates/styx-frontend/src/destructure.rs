// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destructure a template string against a lookup table of replacement
//! keys, producing an ordered `str | T` token sequence (spec §4.1 step 3,
//! reused by step 6 for `path-template`).
//!
//! Grounded on `destruct_template` in
//! `examples/original_source/src/styx/frontend/boutiques/core.py`, with one
//! deliberate change: the original repeatedly takes the *first* lookup key
//! (in dict insertion order) that occurs in the remaining text. This
//! frontend instead repeatedly finds the *longest* matching key, so that a
//! value-key which is a substring of another (e.g. `[X]` inside `[XTRA]`)
//! can never be mis-split — spec §4.1 step 3 specifies this explicitly.

use std::collections::HashMap;

/// One token of a destructured template: either literal text or a
/// substituted value from the lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<T> {
    /// Literal text between (or around) substitutions.
    Literal(String),
    /// A substituted value.
    Value(T),
}

/// Destructure `template` against `lookup`, repeatedly splitting around the
/// longest key that occurs as a substring of the remaining text.
pub fn destructure<T: Clone>(template: &str, lookup: &HashMap<String, T>) -> Vec<Token<T>> {
    let mut out = Vec::new();
    let mut rest = template;

    'outer: while !rest.is_empty() {
        let mut best: Option<(usize, &str, &T)> = None;
        for (key, value) in lookup {
            if key.is_empty() {
                continue;
            }
            if let Some(pos) = rest.find(key.as_str()) {
                let better = match best {
                    None => true,
                    Some((_, best_key, _)) => {
                        key.len() > best_key.len()
                            || (key.len() == best_key.len() && pos < rest.find(best_key).unwrap())
                    }
                };
                if better {
                    best = Some((pos, key.as_str(), value));
                }
            }
        }

        match best {
            None => {
                out.push(Token::Literal(rest.to_string()));
                break 'outer;
            }
            Some((pos, key, value)) => {
                if pos > 0 {
                    out.push(Token::Literal(rest[..pos].to_string()));
                }
                out.push(Token::Value(value.clone()));
                rest = &rest[pos + key.len()..];
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_values() {
        let mut lookup = HashMap::new();
        lookup.insert("x".to_string(), 12);
        lookup.insert("y".to_string(), 34);
        let out = destructure("hello x, I am y", &lookup);
        assert_eq!(
            out,
            vec![
                Token::Literal("hello ".to_string()),
                Token::Value(12),
                Token::Literal(", I am ".to_string()),
                Token::Value(34),
            ]
        );
    }

    #[test]
    fn prefers_longest_match_over_substring() {
        let mut lookup = HashMap::new();
        lookup.insert("[X]".to_string(), "short");
        lookup.insert("[XTRA]".to_string(), "long");
        let out = destructure("[XTRA]", &lookup);
        assert_eq!(out, vec![Token::Value("long")]);
    }

    #[test]
    fn empty_template_yields_no_tokens() {
        let lookup: HashMap<String, i32> = HashMap::new();
        assert!(destructure("", &lookup).is_empty());
    }

    #[test]
    fn no_match_yields_single_literal() {
        let lookup: HashMap<String, i32> = HashMap::new();
        assert_eq!(
            destructure("plain text", &lookup),
            vec![Token::Literal("plain text".to_string())]
        );
    }
}
