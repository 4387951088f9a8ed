// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::utils::{enquote, linebreak_paragraph, struct_has_outputs};
use styx_codegen::{linebuffer, snake_case, GenericArg, GenericFunc, GenericModule, GenericModuleItem, GenericStructure, LineBuffer};
use styx_ir::visit::iter_structs_recursively;
use styx_ir::{Param, ParamBody};
use styx_provider::{LanguageExprProvider, LanguageHighLevelProvider, Lookup, MStr};

use crate::RLanguageProvider;

const DOCSTRING_WIDTH: usize = 79;

impl LanguageHighLevelProvider for RLanguageProvider {
    fn if_else_block(&self, condition: &str, truthy: &LineBuffer, falsy: Option<&LineBuffer>) -> LineBuffer {
        let mut buf = vec![format!("if ({condition}) {{")];
        buf.extend(linebuffer::indent(truthy, 1));
        buf.push("}".to_string());
        if let Some(falsy) = falsy {
            buf.push("else {".to_string());
            buf.extend(linebuffer::indent(falsy, 1));
            buf.push("}".to_string());
        }
        buf
    }

    fn generate_arg_declaration(&self, arg: &GenericArg) -> String {
        match &arg.default {
            Some(default) => format!("{}={default}", arg.name),
            None => arg.name.clone(),
        }
    }

    fn generate_func(&self, func: &GenericFunc) -> LineBuffer {
        let mut args: Vec<&GenericArg> = func.args.iter().collect();
        args.sort_by_key(|a| a.default.is_some());

        let mut buf = LineBuffer::new();
        if func.docstring_body.is_some() || !args.is_empty() || func.return_descr.is_some() {
            buf.push("#' @title".to_string());
            match &func.docstring_body {
                Some(body) => buf.extend(linebreak_paragraph(body, DOCSTRING_WIDTH, DOCSTRING_WIDTH).iter().map(|l| format!("#' {l}"))),
                None => buf.push("#' Function documentation".to_string()),
            }
            buf.push("#'".to_string());
            buf.push("#' @param".to_string());
            for arg in &args {
                if arg.name == "self" {
                    continue;
                }
                if let Some(doc) = &arg.docstring {
                    buf.push(format!("#' {} {doc}", arg.name));
                }
            }
            buf.push("#'".to_string());
            if let Some(descr) = &func.return_descr {
                buf.push(format!("#' @return {descr}"));
            }
        }

        buf.push(format!("{} <- function(", func.name));
        for arg in &args {
            buf.extend(linebuffer::indent(&vec![format!("{},", self.generate_arg_declaration(arg))], 1));
        }
        buf.push(") {".to_string());

        if func.body.is_empty() {
            buf.extend(linebuffer::indent(&vec!["NULL".to_string()], 1));
        } else {
            buf.extend(linebuffer::indent(&func.body, 1));
        }
        buf.push("}".to_string());
        buf
    }

    fn generate_structure(&self, structure: &GenericStructure) -> LineBuffer {
        let mut fields: Vec<&GenericArg> = structure.fields.iter().collect();
        fields.sort_by_key(|f| f.default.is_some());

        let mut buf = vec![format!("#' Create a new {}", structure.name), "#'".to_string()];
        if let Some(doc) = &structure.docstring {
            buf.push(format!("#' {doc}"));
        }
        buf.push("#' Fields:".to_string());
        for f in &fields {
            buf.push(format!("#   {}: {}", f.name, f.docstring.clone().unwrap_or_default()));
        }

        buf.push(format!("{} <- function(", structure.name));
        for f in &fields {
            let suffix = f.default.as_deref().map(|d| format!(" = {d}")).unwrap_or_default();
            buf.extend(linebuffer::indent(&vec![format!("{}{suffix},", f.name)], 1));
        }
        buf.push(") {".to_string());
        buf.extend(linebuffer::indent(
            &vec!["structure(".to_string(), "  list(".to_string()],
            1,
        ));
        for f in &fields {
            buf.extend(linebuffer::indent(&vec![format!("{} = {},", f.name, f.name)], 2));
        }
        buf.extend(linebuffer::indent(
            &vec![format!("__STYXTYPE__ = {}", self.expr_str(&structure.name)), "),".to_string()],
            2,
        ));
        buf.extend(linebuffer::indent(&vec![format!("class = {}", self.expr_str(&structure.name))], 2));
        buf.extend(linebuffer::indent(&vec![")".to_string()], 1));
        buf.push("}".to_string());
        buf
    }

    fn generate_module(&self, module: &GenericModule) -> LineBuffer {
        let exports = if module.exports.is_empty() {
            LineBuffer::new()
        } else {
            let mut sorted = module.exports.clone();
            sorted.sort();
            let mut buf = vec!["# Exports".to_string(), ".exports <- c(".to_string()];
            buf.extend(linebuffer::indent(&sorted.iter().map(|n| format!("{},", self.expr_str(n))).collect(), 1));
            buf.push(")".to_string());
            buf
        };

        let mut buf = LineBuffer::new();
        if let Some(docstr) = &module.docstr {
            buf.push("#'".to_string());
            buf.extend(linebreak_paragraph(docstr, DOCSTRING_WIDTH, DOCSTRING_WIDTH).iter().map(|l| format!("#' {l}")));
            buf.push("#'".to_string());
        }
        buf.extend(self.expr_line_comment(&vec![
            "This file was auto generated by Styx.".to_string(),
            "Do not edit this file directly.".to_string(),
        ]));
        buf = linebuffer::blank_after(&buf, 1);
        buf.extend(linebuffer::blank_before(&module.imports, 0));
        buf.extend(linebuffer::blank_before(&module.header, 0));
        for item in &module.items {
            let rendered = match item {
                GenericModuleItem::Func(f) => self.generate_func(f),
                GenericModuleItem::Structure(s) => self.generate_structure(s),
            };
            buf.extend(linebuffer::blank_before(&rendered, 2));
        }
        buf.extend(linebuffer::blank_before(&module.footer, 0));
        buf.extend(linebuffer::blank_before(&exports, 2));
        buf
    }

    fn return_statement(&self, value: &str) -> String {
        format!("return({value})")
    }

    fn wrapper_module_imports(&self) -> LineBuffer {
        vec!["library(styxdefs)".to_string(), "source(\"utils.R\")".to_string()]
    }

    fn generate_reexport_module(&self, interface_module_names: &[String]) -> LineBuffer {
        let mut buf = vec![
            "# This file was auto generated by Styx.".to_string(),
            "# Do not edit this file directly.".to_string(),
        ];
        for name in interface_module_names {
            buf.push(format!("source(\"{name}.R\")", ));
        }
        buf
    }

    fn metadata_symbol(&self, interface_base_name: &str) -> String {
        styx_codegen::screaming_snake_case(&format!("{interface_base_name}_METADATA"))
    }

    fn generate_metadata(&self, metadata_symbol: &str, entries: &[(String, String)]) -> LineBuffer {
        let mut buf = vec![format!("{metadata_symbol} <- list(")];
        for (key, value) in entries {
            buf.push(format!("    {key} = {value},"));
        }
        buf.push(")".to_string());
        buf
    }

    fn cargs_symbol(&self) -> String {
        "cargs".to_string()
    }

    fn cargs_declare(&self, cargs_symbol: &str) -> LineBuffer {
        vec![format!("{cargs_symbol} <- list()")]
    }

    fn mstr_cargs_add(&self, cargs_symbol: &str, values: &[MStr]) -> LineBuffer {
        if values.len() == 1 {
            let v = &values[0];
            return if v.is_list {
                vec![format!("{cargs_symbol} <- append({cargs_symbol}, {})", v.expr)]
            } else {
                vec![format!("{cargs_symbol} <- append({cargs_symbol}, list({}))", v.expr)]
            };
        }
        let mut buf = vec![format!("{cargs_symbol} <- append({cargs_symbol}, list(")];
        for v in values {
            let element = if v.is_list { format!("unlist({})", v.expr) } else { v.expr.clone() };
            buf.extend(linebuffer::indent(&vec![format!("{element},")], 1));
        }
        buf.push("))".to_string());
        buf
    }

    fn mstr_collapse(&self, mstr: &MStr, join: &str) -> MStr {
        if !mstr.is_list {
            return mstr.clone();
        }
        MStr::scalar(format!("paste({}, collapse={})", mstr.expr, self.expr_str(join)))
    }

    fn mstr_concat(&self, mstrs: &[MStr], inner_join: &str, outer_join: &str) -> MStr {
        let inner: Vec<String> = mstrs.iter().map(|m| self.mstr_collapse(m, inner_join).expr).collect();
        if outer_join.is_empty() {
            MStr::scalar(format!("paste0({})", inner.join(", ")))
        } else {
            MStr::scalar(format!("paste({}, collapse={})", inner.join(", "), self.expr_str(outer_join)))
        }
    }

    fn mstr_empty_literal_like(&self, mstr: &MStr) -> String {
        if mstr.is_list { "list()".to_string() } else { "\"\"".to_string() }
    }

    fn runner_symbol(&self) -> String {
        "runner".to_string()
    }

    fn runner_declare(&self, runner_symbol: &str) -> LineBuffer {
        vec![format!("{runner_symbol} <- {runner_symbol} %||% get.global.runner()")]
    }

    fn symbol_execution(&self) -> String {
        "execution".to_string()
    }

    fn execution_declare(&self, execution_symbol: &str, metadata_symbol: &str) -> LineBuffer {
        vec![format!("{execution_symbol} <- runner$start.execution({metadata_symbol})")]
    }

    fn execution_process_params(&self, execution_symbol: &str, params_symbol: &str) -> LineBuffer {
        vec![format!("{params_symbol} <- {execution_symbol}$params({params_symbol})")]
    }

    fn execution_run(
        &self,
        execution_symbol: &str,
        cargs_symbol: &str,
        stdout_output_symbol: Option<&str>,
        stderr_output_symbol: Option<&str>,
    ) -> LineBuffer {
        let so = stdout_output_symbol
            .map(|s| format!(", handle.stdout=function(s) ret${s} <- c(ret${s}, s)"))
            .unwrap_or_default();
        let se = stderr_output_symbol
            .map(|s| format!(", handle.stderr=function(s) ret${s} <- c(ret${s}, s)"))
            .unwrap_or_default();
        vec![format!("{execution_symbol}$run({cargs_symbol}{so}{se})")]
    }

    fn generate_ret_object_creation(
        &self,
        buf: &mut LineBuffer,
        execution_symbol: &str,
        output_type: &str,
        members: &[(String, String)],
    ) {
        buf.push("ret <- list(".to_string());
        buf.extend(linebuffer::indent(&vec![format!("root = {execution_symbol}$output.file(\".\"),")], 1));
        for (name, expr) in members {
            buf.extend(linebuffer::indent(&vec![format!("{name} = {expr},")], 1));
        }
        buf.push(")".to_string());
        buf.push(format!("class(ret) <- {}", self.expr_str(output_type)));
    }

    fn resolve_output_file(&self, execution_symbol: &str, file_expr: &str) -> String {
        format!("{execution_symbol}$output.file({file_expr})")
    }

    fn struct_collect_outputs(&self, struct_param: &Param, struct_symbol: &str) -> String {
        if struct_param.is_list() {
            let mapped = format!(
                "lapply({struct_symbol}, function(i) if (!is.null(dyn.outputs(i[[\"__STYXTYPE__\"]]))) dyn.outputs(i[[\"__STYXTYPE__\"]])(i, execution) else NULL)"
            );
            if struct_param.nullable {
                format!("(if (!is.null({struct_symbol})) {mapped} else NULL)")
            } else {
                mapped
            }
        } else {
            let base = format!("dyn.outputs({struct_symbol}[[\"__STYXTYPE__\"]])({struct_symbol}, execution)");
            if struct_param.nullable {
                format!("(if (!is.null({struct_symbol})) {base} else NULL)")
            } else {
                base
            }
        }
    }

    fn dyn_declare(&self, lookup: &Lookup, root_struct: &Param) -> Vec<GenericFunc> {
        let structs = iter_structs_recursively(root_struct, false);

        let cargs_items: Vec<(String, String)> = structs
            .iter()
            .map(|s| {
                let name = s.body.struct_name().unwrap_or_default();
                (self.expr_str(name), format!("cargs_{}", snake_case(lookup.struct_type_of(s.base.id))))
            })
            .collect();
        let cargs_func = GenericFunc {
            name: "dyn.cargs".to_string(),
            args: vec![{
                let mut a = GenericArg::new("t");
                a.ty = Some("character".to_string());
                a.docstring = Some("Command type".to_string());
                a
            }],
            docstring_body: Some("Get build cargs function by command type.".to_string()),
            body: {
                let mut body = vec!["dispatch_table <- list(".to_string()];
                body.extend(linebuffer::indent(&cargs_items.iter().map(|(k, v)| format!("{k} = {v},")).collect(), 1));
                body.push(")".to_string());
                body.push("return(dispatch_table[[t]])".to_string());
                body
            },
            return_descr: Some("Build cargs function.".to_string()),
            return_type: Some("function".to_string()),
        };

        let outputs_items: Vec<(String, String)> = structs
            .iter()
            .filter(|s| struct_has_outputs(s))
            .map(|s| {
                let name = s.body.struct_name().unwrap_or_default();
                (self.expr_str(name), format!("outputs_{}", snake_case(lookup.struct_type_of(s.base.id))))
            })
            .collect();
        let outputs_func = GenericFunc {
            name: "dyn.outputs".to_string(),
            args: vec![{
                let mut a = GenericArg::new("t");
                a.ty = Some("character".to_string());
                a.docstring = Some("Command type".to_string());
                a
            }],
            docstring_body: Some("Get build outputs function by command type.".to_string()),
            body: {
                let mut body = vec!["dispatch_table <- list(".to_string()];
                body.extend(linebuffer::indent(&outputs_items.iter().map(|(k, v)| format!("{k} = {v},")).collect(), 1));
                body.push(")".to_string());
                body.push("return(dispatch_table[[t]])".to_string());
                body
            },
            return_descr: Some("Build outputs function.".to_string()),
            return_type: Some("function".to_string()),
        };

        vec![cargs_func, outputs_func]
    }

    fn param_dict_type_declare(&self, lookup: &Lookup, struct_param: &Param) -> LineBuffer {
        let ParamBody::Struct { children, .. } = &struct_param.body else {
            return LineBuffer::new();
        };
        let dict_symbol = lookup.struct_type_of(struct_param.base.id);
        let mut required: Vec<String> = vec![self.expr_str("__STYXTYPE__")];
        required.extend(children.iter().map(|p| self.expr_str(&p.base.name)));

        let mut buf = vec![format!("validate_{dict_symbol} <- function(x) {{")];
        buf.extend(linebuffer::indent(&vec!["required_fields <- c(".to_string()], 1));
        buf.extend(linebuffer::indent(&required.iter().map(|f| format!("{f},")).collect(), 2));
        buf.extend(linebuffer::indent(&vec![")".to_string()], 1));
        buf.extend(linebuffer::indent(
            &vec![
                "if (!all(required_fields %in% names(x))) {".to_string(),
                "  stop(\"Missing required fields in parameter dictionary\")".to_string(),
                "}".to_string(),
                "return(TRUE)".to_string(),
            ],
            1,
        ));
        buf.push("}".to_string());
        buf
    }

    fn param_dict_create(&self, name: &str, struct_param: &Param, items: &[(String, String)]) -> LineBuffer {
        let type_tag = struct_param.body.struct_name().unwrap_or_default();
        let mut buf = vec![format!("{name} <- list(")];
        buf.extend(linebuffer::indent(&vec![format!("\"__STYXTYPE__\" = {}", self.expr_str(type_tag))], 1));
        for (key, value) in items {
            buf.extend(linebuffer::indent(&vec![format!("{} = {value},", self.expr_str(key))], 1));
        }
        buf.push(")".to_string());
        buf
    }

    fn param_dict_set(&self, dict_symbol: &str, param: &Param, value_expr: &str) -> LineBuffer {
        vec![format!("{dict_symbol}[[{}]] <- {value_expr}", self.expr_str(&param.base.name))]
    }

    fn param_dict_get(&self, name: &str, param: &Param) -> String {
        format!("{name}[[{}]]", self.expr_str(&param.base.name))
    }

    fn param_dict_get_or_null(&self, name: &str, param: &Param) -> String {
        format!("{name}[[{}]] %||% NULL", self.expr_str(&param.base.name))
    }

    fn raise_value_error(&self, message_expr: &str) -> LineBuffer {
        vec![format!("stop({message_expr})")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cargs_declare_starts_empty_list() {
        let p = RLanguageProvider;
        assert_eq!(p.cargs_declare("cargs"), vec!["cargs <- list()"]);
    }

    #[test]
    fn enquote_is_still_available_for_callers() {
        assert_eq!(enquote("x", '"'), "\"x\"");
    }
}
