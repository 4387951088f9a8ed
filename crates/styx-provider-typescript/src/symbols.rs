// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::{pascal_case, screaming_snake_case, snake_case, Scope};
use styx_provider::LanguageSymbolProvider;

use crate::TypeScriptLanguageProvider;

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "implements", "interface", "let",
    "package", "private", "protected", "public", "static", "yield", "any", "boolean",
    "constructor", "declare", "get", "module", "require", "number", "set", "string", "symbol",
    "type", "from", "of",
];

fn is_legal_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl LanguageSymbolProvider for TypeScriptLanguageProvider {
    fn symbol_legal(&self, name: &str) -> bool {
        is_legal_identifier(name)
    }

    fn language_scope(&self) -> Scope {
        let mut scope = Scope::root();
        for keyword in KEYWORDS {
            let _ = scope.add_or_die(keyword, |_| true);
        }
        scope
    }

    fn symbol_from(&self, name: &str) -> String {
        let mut rewritten: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
            .collect();
        if rewritten.is_empty() {
            rewritten.push('_');
        }
        if rewritten.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            format!("_${rewritten}")
        } else {
            rewritten
        }
    }

    fn symbol_constant_case_from(&self, name: &str) -> String {
        screaming_snake_case(&self.symbol_from(name))
    }

    fn symbol_class_case_from(&self, name: &str) -> String {
        pascal_case(&self.symbol_from(name))
    }

    fn symbol_var_case_from(&self, name: &str) -> String {
        snake_case(&self.symbol_from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_led_names_get_dollar_prefixed() {
        let p = TypeScriptLanguageProvider;
        assert_eq!(p.symbol_from("2nd"), "_$2nd");
    }
}
