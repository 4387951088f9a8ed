// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::utils::enbrace;
use styx_codegen::LineBuffer;
use styx_provider::LanguageExprProvider;

use crate::RLanguageProvider;

fn quote(v: &str) -> String {
    format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
}

impl LanguageExprProvider for RLanguageProvider {
    fn expr_bool(&self, v: bool) -> String {
        if v { "TRUE".to_string() } else { "FALSE".to_string() }
    }

    fn expr_int(&self, v: i64) -> String {
        v.to_string()
    }

    fn expr_float(&self, v: f64) -> String {
        v.to_string()
    }

    fn expr_str(&self, v: &str) -> String {
        quote(v)
    }

    fn expr_list(&self, elements: &[String]) -> String {
        format!("c({})", elements.join(", "))
    }

    fn expr_null(&self) -> String {
        "NULL".to_string()
    }

    fn expr_remove_suffixes(&self, str_expr: &str, suffixes: &[String]) -> String {
        let mut result = str_expr.to_string();
        for suffix in suffixes {
            result = format!("gsub({}, '', {result})", self.expr_str(&format!("({suffix})$")));
        }
        result
    }

    fn expr_path_get_filename(&self, path_expr: &str) -> String {
        format!("basename({path_expr})")
    }

    fn expr_numeric_to_str(&self, numeric_expr: &str) -> String {
        format!("as.character({numeric_expr})")
    }

    fn expr_conditions_join_and(&self, conditions: &[String]) -> String {
        conditions.join(" && ")
    }

    fn expr_conditions_join_or(&self, conditions: &[String]) -> String {
        conditions.join(" || ")
    }

    fn expr_concat_strs(&self, exprs: &[String], join: &str) -> String {
        if join.is_empty() {
            format!("paste0({})", exprs.join(", "))
        } else {
            format!("paste({}, collapse={})", exprs.join(", "), self.expr_str(join))
        }
    }

    fn expr_ternary(&self, condition: &str, truthy: &str, falsy: &str) -> String {
        let condition = if condition.contains(' ') { enbrace(condition, '(') } else { condition.to_string() };
        format!("ifelse({condition}, {truthy}, {falsy})")
    }

    fn expr_line_comment(&self, comment_lines: &LineBuffer) -> LineBuffer {
        styx_codegen::linebuffer::comment(comment_lines, "#")
    }

    fn expr_count_true(&self, conditions: &[String]) -> String {
        format!("sum(c({}))", conditions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_parenthesizes_compound_conditions() {
        let p = RLanguageProvider;
        assert_eq!(p.expr_ternary("x > 0", "1", "2"), "ifelse((x > 0), 1, 2)");
    }

    #[test]
    fn concat_without_join_uses_paste0() {
        let p = RLanguageProvider;
        assert_eq!(p.expr_concat_strs(&["a".to_string(), "b".to_string()], ""), "paste0(a, b)");
    }
}
