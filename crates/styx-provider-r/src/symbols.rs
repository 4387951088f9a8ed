// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::{pascal_case, screaming_snake_case, Scope};
use styx_provider::LanguageSymbolProvider;

use crate::RLanguageProvider;

const RESERVED_WORDS: &[&str] = &[
    "if", "else", "repeat", "while", "function", "for", "in", "next", "break", "TRUE", "FALSE",
    "NULL", "Inf", "NaN", "NA", "NA_integer_", "NA_real_", "NA_complex_", "NA_character_", "...",
];

const BASE_FUNCTIONS: &[&str] = &[
    "c", "list", "data.frame", "matrix", "array", "factor", "sum", "mean", "median", "sd", "var",
    "cor", "cov", "plot", "print", "cat", "paste", "paste0", "sprintf",
];

fn is_legal_identifier(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if first.is_ascii_digit() {
        return false;
    }
    if first == '.' {
        if let Some(second) = name.chars().nth(1) {
            if second.is_ascii_digit() {
                return false;
            }
        }
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '.' || c == '_')
}

impl LanguageSymbolProvider for RLanguageProvider {
    fn symbol_legal(&self, name: &str) -> bool {
        is_legal_identifier(name)
    }

    fn language_scope(&self) -> Scope {
        let mut scope = Scope::root();
        for word in RESERVED_WORDS.iter().chain(BASE_FUNCTIONS.iter()) {
            let _ = scope.add_or_die(word, |_| true);
        }
        scope
    }

    fn symbol_from(&self, name: &str) -> String {
        let mut rewritten: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '.' { c } else { '.' })
            .collect();
        if rewritten.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            rewritten = format!("X{rewritten}");
        }
        if rewritten.starts_with('.') && rewritten.chars().nth(1).is_some_and(|c| c.is_ascii_digit()) {
            rewritten = format!("X{rewritten}");
        }
        rewritten
    }

    fn symbol_constant_case_from(&self, name: &str) -> String {
        screaming_snake_case(&self.symbol_from(name))
    }

    fn symbol_class_case_from(&self, name: &str) -> String {
        pascal_case(&self.symbol_from(name))
    }

    fn symbol_var_case_from(&self, name: &str) -> String {
        self.symbol_from(name).replace('_', ".").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_led_names_get_x_prefixed() {
        let p = RLanguageProvider;
        assert_eq!(p.symbol_from("2nd"), "X2nd");
    }

    #[test]
    fn var_case_uses_dots_not_underscores() {
        let p = RLanguageProvider;
        assert_eq!(p.symbol_var_case_from("input_file"), "input.file");
    }

    #[test]
    fn reserved_words_are_illegal_in_scope() {
        let p = RLanguageProvider;
        let scope = p.language_scope();
        assert!(scope.contains("NULL"));
        assert!(scope.contains("paste0"));
    }
}
