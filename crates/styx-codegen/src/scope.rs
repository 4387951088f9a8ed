// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parent-chain symbol allocation for generated-code name hygiene, ported
//! from `backend/generic/scope.py`. A [`Scope`] never renames a symbol a
//! caller explicitly requires (`add_or_die`); [`Scope::add_or_dodge`]
//! disambiguates by appending `_`, `_2`, `_3`, … until the candidate is
//! free in this scope and every ancestor.

use thiserror::Error;

/// Failure modes for [`Scope`] symbol allocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// `add_or_die` was asked to register a symbol that is not a legal
    /// identifier in the target language.
    #[error("symbol `{0}` is not a legal identifier in this language")]
    IllegalSymbol(String),
    /// `add_or_die` was asked to register a symbol already visible in this
    /// scope or an ancestor.
    #[error("symbol `{0}` already exists in this scope")]
    DuplicateSymbol(String),
}

/// A symbol table scoped to one generated-code block (a module, a function
/// body, …), chained to an optional parent so that a child scope can see
/// but never shadow its ancestors' symbols.
#[derive(Debug, Clone)]
pub struct Scope {
    symbols: std::collections::HashSet<String>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    /// A fresh root scope with no parent — typically seeded immediately
    /// with a language's reserved words via [`Scope::add_or_die`].
    #[must_use]
    pub fn root() -> Self {
        Self {
            symbols: std::collections::HashSet::new(),
            parent: None,
        }
    }

    /// A child scope nested under `parent`.
    #[must_use]
    pub fn child(parent: Scope) -> Self {
        Self {
            symbols: std::collections::HashSet::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// `true` if `symbol` is visible in this scope or any ancestor.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol) || self.parent.as_deref().is_some_and(|p| p.contains(symbol))
    }

    /// Register `symbol` exactly as given, failing if it collides or is
    /// not legal per `is_legal`.
    pub fn add_or_die(
        &mut self,
        symbol: &str,
        is_legal: impl Fn(&str) -> bool,
    ) -> Result<String, ScopeError> {
        if !is_legal(symbol) {
            return Err(ScopeError::IllegalSymbol(symbol.to_string()));
        }
        if self.contains(symbol) {
            return Err(ScopeError::DuplicateSymbol(symbol.to_string()));
        }
        self.symbols.insert(symbol.to_string());
        Ok(symbol.to_string())
    }

    /// Register a symbol derived from `symbol`, appending `_`, then `_2`,
    /// `_3`, … until a free, legal name is found. Never fails: the
    /// disambiguation suffix always eventually yields a fresh name.
    pub fn add_or_dodge(&mut self, symbol: &str, is_legal: impl Fn(&str) -> bool) -> String {
        let mut dodge = 0usize;
        loop {
            let candidate = match dodge {
                0 => symbol.to_string(),
                1 => format!("{symbol}_"),
                n => format!("{symbol}_{n}"),
            };
            if let Ok(name) = self.add_or_die(&candidate, &is_legal) {
                return name;
            }
            dodge += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal(_: &str) -> bool {
        true
    }

    #[test]
    fn dodge_avoids_collision_in_same_scope() {
        let mut scope = Scope::root();
        assert_eq!(scope.add_or_dodge("x", legal), "x");
        assert_eq!(scope.add_or_dodge("x", legal), "x_");
        assert_eq!(scope.add_or_dodge("x", legal), "x_2");
    }

    #[test]
    fn dodge_avoids_collision_with_ancestor() {
        let mut parent = Scope::root();
        parent.add_or_die("x", legal).unwrap();
        let mut child = Scope::child(parent);
        assert_eq!(child.add_or_dodge("x", legal), "x_");
    }

    #[test]
    fn add_or_die_rejects_illegal_symbol() {
        let mut scope = Scope::root();
        assert_eq!(
            scope.add_or_die("123bad", |s| !s.starts_with(char::is_numeric)),
            Err(ScopeError::IllegalSymbol("123bad".to_string()))
        );
    }

    #[test]
    fn add_or_die_rejects_duplicate() {
        let mut scope = Scope::root();
        scope.add_or_die("x", legal).unwrap();
        assert_eq!(
            scope.add_or_die("x", legal),
            Err(ScopeError::DuplicateSymbol("x".to_string()))
        );
    }
}
