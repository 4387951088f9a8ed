// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::{pascal_case, screaming_snake_case, snake_case, Scope};
use styx_provider::LanguageSymbolProvider;

use crate::PythonLanguageProvider;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield", "match", "case",
];

const BUILTINS: &[&str] = &[
    "list", "dict", "set", "tuple", "str", "int", "float", "bool", "bytes", "object", "type",
    "len", "print", "range", "super", "self", "cls",
];

pub(crate) fn is_legal_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl LanguageSymbolProvider for PythonLanguageProvider {
    fn symbol_legal(&self, name: &str) -> bool {
        is_legal_identifier(name) && !KEYWORDS.contains(&name)
    }

    fn language_scope(&self) -> Scope {
        let mut scope = Scope::root();
        for reserved in KEYWORDS.iter().chain(BUILTINS.iter()) {
            // Reserved words are always legal names; only collisions matter here.
            let _ = scope.add_or_die(reserved, |_| true);
        }
        scope
    }

    fn symbol_from(&self, name: &str) -> String {
        let mut rewritten: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        if rewritten.is_empty() {
            rewritten.push('_');
        }
        let starts_with_digit = rewritten.chars().next().is_some_and(|c| c.is_ascii_digit());
        if starts_with_digit {
            format!("v_{rewritten}")
        } else {
            rewritten
        }
    }

    fn symbol_constant_case_from(&self, name: &str) -> String {
        self.symbol_from(&screaming_snake_case(name))
    }

    fn symbol_class_case_from(&self, name: &str) -> String {
        self.symbol_from(&pascal_case(name))
    }

    fn symbol_var_case_from(&self, name: &str) -> String {
        self.symbol_from(&snake_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_case_survives_hyphenated_input() {
        let p = PythonLanguageProvider;
        assert_eq!(p.symbol_class_case_from("fast-bet-model"), "FastBetModel");
    }

    #[test]
    fn language_scope_blocks_keywords() {
        let scope = PythonLanguageProvider.language_scope();
        assert!(scope.contains("class"));
        assert!(!scope.contains("whatever"));
    }
}
