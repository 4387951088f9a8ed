// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::LineBuffer;
use styx_provider::LanguageExprProvider;

use crate::TypeScriptLanguageProvider;

fn quote(v: &str) -> String {
    format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
}

impl LanguageExprProvider for TypeScriptLanguageProvider {
    fn expr_bool(&self, v: bool) -> String {
        if v { "true".to_string() } else { "false".to_string() }
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
        format!("[{}]", elements.join(", "))
    }

    fn expr_null(&self) -> String {
        "null".to_string()
    }

    fn expr_remove_suffixes(&self, str_expr: &str, suffixes: &[String]) -> String {
        let mut result = str_expr.to_string();
        for suffix in suffixes {
            let condition = format!("{result}.endsWith({})", quote(suffix));
            let removal = format!("{result}.slice(0, -{})", suffix.len());
            result = format!("({condition} ? {removal} : {result})");
        }
        result
    }

    fn expr_path_get_filename(&self, path_expr: &str) -> String {
        format!("path.basename({path_expr})")
    }

    fn expr_numeric_to_str(&self, numeric_expr: &str) -> String {
        format!("String({numeric_expr})")
    }

    fn expr_conditions_join_and(&self, conditions: &[String]) -> String {
        conditions.join(" && ")
    }

    fn expr_conditions_join_or(&self, conditions: &[String]) -> String {
        conditions.join(" || ")
    }

    fn expr_concat_strs(&self, exprs: &[String], join: &str) -> String {
        format!("[{}].join({})", exprs.join(", "), quote(join))
    }

    fn expr_ternary(&self, condition: &str, truthy: &str, falsy: &str) -> String {
        if condition.contains(' ') && !condition.starts_with('(') {
            format!("({condition}) ? {truthy} : {falsy}")
        } else {
            format!("{condition} ? {truthy} : {falsy}")
        }
    }

    fn expr_line_comment(&self, comment_lines: &LineBuffer) -> LineBuffer {
        styx_codegen::linebuffer::comment(comment_lines, "//")
    }

    fn expr_count_true(&self, conditions: &[String]) -> String {
        format!("[{}].filter(Boolean).length", conditions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_suffixes_chains_ternaries() {
        let p = TypeScriptLanguageProvider;
        let got = p.expr_remove_suffixes("name", &[".nii".to_string(), ".gz".to_string()]);
        assert!(got.contains("endsWith"));
    }
}
