// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier case conversion shared by every target-language provider
//! (ported from `backend/generic/string_case.py`).

/// Split `name` into lowercase words on camel/Pascal-case boundaries,
/// underscores, hyphens, dots, and whitespace.
#[must_use]
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c.to_ascii_lowercase());
        prev_lower = c.is_lowercase() || c.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `snake_case` conversion.
#[must_use]
pub fn snake_case(name: &str) -> String {
    split_words(name).join("_")
}

/// `SCREAMING_SNAKE_CASE` conversion.
#[must_use]
pub fn screaming_snake_case(name: &str) -> String {
    split_words(name).join("_").to_uppercase()
}

/// `PascalCase` conversion.
#[must_use]
pub fn pascal_case(name: &str) -> String {
    split_words(name)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("")
}

/// `camelCase` conversion.
#[must_use]
pub fn camel_case(name: &str) -> String {
    let words = split_words(name);
    words
        .into_iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w } else { capitalize(w) })
        .collect::<Vec<_>>()
        .join("")
}

fn capitalize(word: String) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_mixed_delimiters() {
        assert_eq!(snake_case("input-file.Name"), "input_file_name");
        assert_eq!(pascal_case("input-file_name"), "InputFileName");
        assert_eq!(camel_case("input-file_name"), "inputFileName");
        assert_eq!(screaming_snake_case("input-file_name"), "INPUT_FILE_NAME");
    }

    #[test]
    fn splits_on_case_boundaries() {
        assert_eq!(snake_case("fastBET"), "fast_bet");
    }
}
