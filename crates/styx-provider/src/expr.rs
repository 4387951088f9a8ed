// SPDX-License-Identifier: MIT OR Apache-2.0

//! Literal and expression construction (ported from `LanguageExprProvider`).

use styx_codegen::LineBuffer;
use styx_ir::Literal;

/// A numeric comparison operator, used to render range-validation guards
/// against a `Param`'s declared `Int`/`Float` bounds (spec §4.3 supplement,
/// scenario S3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

/// Construction of language literal and composite expressions.
pub trait LanguageExprProvider {
    /// A boolean literal expression.
    fn expr_bool(&self, v: bool) -> String;
    /// An integer literal expression.
    fn expr_int(&self, v: i64) -> String;
    /// A float literal expression.
    fn expr_float(&self, v: f64) -> String;
    /// A string literal expression.
    fn expr_str(&self, v: &str) -> String;
    /// A list-literal expression from already-rendered element expressions.
    fn expr_list(&self, elements: &[String]) -> String;
    /// The language's null/none expression.
    fn expr_null(&self) -> String;

    /// Render any [`Literal`] as its language expression.
    fn expr_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Bool(v) => self.expr_bool(*v),
            Literal::Int(v) => self.expr_int(*v),
            Literal::Float(v) => self.expr_float(*v),
            Literal::Str(v) => self.expr_str(v),
        }
    }

    /// A string expression with each of `suffixes` stripped from its end,
    /// if present (used for `path-template-stripped-extensions`).
    fn expr_remove_suffixes(&self, str_expr: &str, suffixes: &[String]) -> String;
    /// Extract the filename component from a path expression.
    fn expr_path_get_filename(&self, path_expr: &str) -> String;
    /// Render a numeric expression as a string expression.
    fn expr_numeric_to_str(&self, numeric_expr: &str) -> String;
    /// Join boolean condition expressions with logical AND.
    fn expr_conditions_join_and(&self, conditions: &[String]) -> String;
    /// Join boolean condition expressions with logical OR.
    fn expr_conditions_join_or(&self, conditions: &[String]) -> String;
    /// Concatenate string expressions, optionally interspersing a literal
    /// join string between them.
    fn expr_concat_strs(&self, exprs: &[String], join: &str) -> String;
    /// A ternary/conditional expression.
    fn expr_ternary(&self, condition: &str, truthy: &str, falsy: &str) -> String;
    /// Wrap `comment_lines` as a language line comment.
    fn expr_line_comment(&self, comment_lines: &LineBuffer) -> LineBuffer;

    /// Count how many of `conditions` evaluate to true (used by mutex-group
    /// and "one is required" validation, ported from the numeric `+`-sum
    /// over booleans in `compiler/core.py`'s `_generate_group_constraint_expr`).
    fn expr_count_true(&self, conditions: &[String]) -> String;

    /// A numeric comparison expression, used to render range-validation
    /// guards (`minimum`/`maximum`/`exclusive-*` constraints, spec §4.1).
    fn expr_compare(&self, lhs: &str, op: CompareOp, rhs: &str) -> String {
        let symbol = match op {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        };
        format!("{lhs} {symbol} {rhs}")
    }
}
