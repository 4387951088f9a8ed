// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::LineBuffer;
use styx_provider::LanguageExprProvider;

use crate::PythonLanguageProvider;

fn quote(v: &str) -> String {
    format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
}

impl LanguageExprProvider for PythonLanguageProvider {
    fn expr_bool(&self, v: bool) -> String {
        if v { "True".to_string() } else { "False".to_string() }
    }

    fn expr_int(&self, v: i64) -> String {
        v.to_string()
    }

    fn expr_float(&self, v: f64) -> String {
        if v.fract() == 0.0 && v.is_finite() {
            format!("{v:.1}")
        } else {
            v.to_string()
        }
    }

    fn expr_str(&self, v: &str) -> String {
        quote(v)
    }

    fn expr_list(&self, elements: &[String]) -> String {
        format!("[{}]", elements.join(", "))
    }

    fn expr_null(&self) -> String {
        "None".to_string()
    }

    fn expr_remove_suffixes(&self, str_expr: &str, suffixes: &[String]) -> String {
        let mut expr = str_expr.to_string();
        for suffix in suffixes {
            expr = format!("{expr}.removesuffix({})", quote(suffix));
        }
        expr
    }

    fn expr_path_get_filename(&self, path_expr: &str) -> String {
        format!("pathlib.Path({path_expr}).name")
    }

    fn expr_numeric_to_str(&self, numeric_expr: &str) -> String {
        format!("str({numeric_expr})")
    }

    fn expr_conditions_join_and(&self, conditions: &[String]) -> String {
        conditions.join(" and ")
    }

    fn expr_conditions_join_or(&self, conditions: &[String]) -> String {
        conditions.join(" or ")
    }

    fn expr_concat_strs(&self, exprs: &[String], join: &str) -> String {
        if join.is_empty() {
            exprs.join(" + ")
        } else {
            exprs.join(&format!(" + {} + ", quote(join)))
        }
    }

    fn expr_ternary(&self, condition: &str, truthy: &str, falsy: &str) -> String {
        if condition.contains(' ') && !condition.starts_with('(') {
            format!("{truthy} if ({condition}) else {falsy}")
        } else {
            format!("{truthy} if {condition} else {falsy}")
        }
    }

    fn expr_line_comment(&self, comment_lines: &LineBuffer) -> LineBuffer {
        styx_codegen::linebuffer::comment(comment_lines, "#")
    }

    fn expr_count_true(&self, conditions: &[String]) -> String {
        format!("sum([{}])", conditions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_keep_a_decimal_point() {
        let p = PythonLanguageProvider;
        assert_eq!(p.expr_float(3.0), "3.0");
        assert_eq!(p.expr_float(3.5), "3.5");
    }

    #[test]
    fn concat_inserts_quoted_join() {
        let p = PythonLanguageProvider;
        let exprs = vec!["a".to_string(), "b".to_string()];
        assert_eq!(p.expr_concat_strs(&exprs, ","), "a + \",\" + b");
    }
}
