// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::utils::{enquote, linebreak_paragraph};
use styx_codegen::{linebuffer, snake_case, GenericArg, GenericFunc, GenericModule, GenericModuleItem, GenericStructure, LineBuffer};
use styx_ir::{Param, ParamBody};
use styx_provider::{LanguageHighLevelProvider, Lookup, MStr};

use crate::PythonLanguageProvider;

const DOCSTRING_WIDTH: usize = 79;

impl LanguageHighLevelProvider for PythonLanguageProvider {
    fn if_else_block(&self, condition: &str, truthy: &LineBuffer, falsy: Option<&LineBuffer>) -> LineBuffer {
        let mut buf = vec![format!("if {condition}:")];
        buf.extend(linebuffer::indent(truthy, 1));
        if let Some(falsy) = falsy {
            buf.push("else:".to_string());
            buf.extend(linebuffer::indent(falsy, 1));
        }
        buf
    }

    fn generate_arg_declaration(&self, arg: &GenericArg) -> String {
        match (&arg.ty, &arg.default) {
            (Some(ty), Some(default)) => format!("{}: {ty} = {default}", arg.name),
            (Some(ty), None) => format!("{}: {ty}", arg.name),
            (None, Some(default)) => format!("{} = {default}", arg.name),
            (None, None) => arg.name.clone(),
        }
    }

    fn generate_func(&self, func: &GenericFunc) -> LineBuffer {
        let mut args: Vec<&GenericArg> = func.args.iter().collect();
        args.sort_by_key(|a| a.default.is_some());
        let return_annotation = func.return_type.as_deref().map(|t| format!(" -> {t}")).unwrap_or_default();
        let mut out = if args.is_empty() {
            vec![format!("def {}(){return_annotation}:", func.name)]
        } else {
            let mut buf = vec![format!("def {}(", func.name)];
            for arg in &args {
                buf.push(format!("    {},", self.generate_arg_declaration(arg)));
            }
            buf.push(format!("){return_annotation}:"));
            buf
        };
        out.extend(linebuffer::indent(&self.function_docstring_and_body(func, &args), 1));
        out
    }

    fn generate_structure(&self, structure: &GenericStructure) -> LineBuffer {
        let mut buf = vec!["@dataclasses.dataclass".to_string(), format!("class {}:", structure.name)];
        let mut inner = LineBuffer::new();
        if let Some(docstring) = &structure.docstring {
            inner.push(format!("\"\"\"{docstring}\"\"\""));
        }
        for field in &structure.fields {
            inner.push(self.generate_arg_declaration(field));
        }
        if inner.is_empty() {
            inner.push("pass".to_string());
        }
        buf.extend(linebuffer::indent(&inner, 1));
        for method in &structure.methods {
            buf.push(String::new());
            buf.extend(linebuffer::indent(&self.generate_func(method), 1));
        }
        buf
    }

    fn generate_module(&self, module: &GenericModule) -> LineBuffer {
        let mut buf = LineBuffer::new();
        buf.push("# This file was auto generated by Styx.".to_string());
        buf.push("# Do not edit this file directly.".to_string());
        if let Some(docstr) = &module.docstr {
            buf.push(format!("\"\"\"{docstr}\"\"\""));
        }
        buf = linebuffer::blank_after(&buf, 1);
        buf.extend(module.imports.clone());
        buf.extend(linebuffer::blank_after(&module.header, 1));
        for (i, item) in module.items.iter().enumerate() {
            if i > 0 {
                buf.push(String::new());
                buf.push(String::new());
            }
            buf.extend(match item {
                GenericModuleItem::Func(f) => self.generate_func(f),
                GenericModuleItem::Structure(s) => self.generate_structure(s),
            });
        }
        if !module.exports.is_empty() {
            buf.push(String::new());
            let quoted: Vec<String> = module.exports.iter().map(|e| enquote(e, '"')).collect();
            buf.push(format!("__all__ = [{}]", quoted.join(", ")));
        }
        buf.extend(module.footer.clone());
        buf
    }

    fn return_statement(&self, value: &str) -> String {
        format!("return {value}")
    }

    fn wrapper_module_imports(&self) -> LineBuffer {
        vec![
            "import dataclasses".to_string(),
            "import pathlib".to_string(),
            "import typing".to_string(),
            "from styxdefs import *".to_string(),
        ]
    }

    fn generate_reexport_module(&self, interface_module_names: &[String]) -> LineBuffer {
        let mut buf = vec![
            "# This file was auto generated by Styx.".to_string(),
            "# Do not edit this file directly.".to_string(),
        ];
        for name in interface_module_names {
            buf.push(format!("from .{name} import *"));
        }
        buf
    }

    fn metadata_symbol(&self, interface_base_name: &str) -> String {
        format!("{}_METADATA", styx_codegen::screaming_snake_case(interface_base_name))
    }

    fn generate_metadata(&self, metadata_symbol: &str, entries: &[(String, String)]) -> LineBuffer {
        let mut buf = vec![format!("{metadata_symbol} = Metadata(")];
        for (key, value) in entries {
            buf.push(format!("    {key}={value},"));
        }
        buf.push(")".to_string());
        buf
    }

    fn cargs_symbol(&self) -> String {
        "cargs".to_string()
    }

    fn cargs_declare(&self, cargs_symbol: &str) -> LineBuffer {
        vec![format!("{cargs_symbol}: list[str] = []")]
    }

    fn mstr_cargs_add(&self, cargs_symbol: &str, values: &[MStr]) -> LineBuffer {
        values
            .iter()
            .map(|v| {
                if v.is_list {
                    format!("{cargs_symbol}.extend({})", v.expr)
                } else {
                    format!("{cargs_symbol}.append({})", v.expr)
                }
            })
            .collect()
    }

    fn mstr_collapse(&self, mstr: &MStr, join: &str) -> MStr {
        if !mstr.is_list {
            return mstr.clone();
        }
        MStr::scalar(format!("{}.join({})", enquote(join, '"'), mstr.expr))
    }

    fn mstr_concat(&self, mstrs: &[MStr], inner_join: &str, outer_join: &str) -> MStr {
        let scalars: Vec<String> = mstrs.iter().map(|m| self.mstr_collapse(m, inner_join).expr).collect();
        MStr::scalar(self.concat_scalars(&scalars, outer_join))
    }

    fn mstr_empty_literal_like(&self, mstr: &MStr) -> String {
        if mstr.is_list { "[]".to_string() } else { "\"\"".to_string() }
    }

    fn runner_symbol(&self) -> String {
        "runner".to_string()
    }

    fn runner_declare(&self, runner_symbol: &str) -> LineBuffer {
        vec![format!("{runner_symbol} = {runner_symbol} or get_global_runner()")]
    }

    fn symbol_execution(&self) -> String {
        "execution".to_string()
    }

    fn execution_declare(&self, execution_symbol: &str, metadata_symbol: &str) -> LineBuffer {
        vec![format!("{execution_symbol} = runner.start_execution({metadata_symbol})")]
    }

    fn execution_process_params(&self, execution_symbol: &str, params_symbol: &str) -> LineBuffer {
        vec![format!("{params_symbol} = {execution_symbol}.params({params_symbol})")]
    }

    fn execution_run(
        &self,
        execution_symbol: &str,
        cargs_symbol: &str,
        stdout_output_symbol: Option<&str>,
        stderr_output_symbol: Option<&str>,
    ) -> LineBuffer {
        let stdout = stdout_output_symbol
            .map(|s| format!(", handle_stdout=lambda s: ret.{s}.append(s)"))
            .unwrap_or_default();
        let stderr = stderr_output_symbol
            .map(|s| format!(", handle_stderr=lambda s: ret.{s}.append(s)"))
            .unwrap_or_default();
        vec![format!("{execution_symbol}.run({cargs_symbol}{stdout}{stderr})")]
    }

    fn generate_ret_object_creation(
        &self,
        buf: &mut LineBuffer,
        execution_symbol: &str,
        output_type: &str,
        members: &[(String, String)],
    ) {
        buf.push(format!("ret = {output_type}("));
        buf.push(format!("    root={execution_symbol}.output_file(\".\"),"));
        for (name, expr) in members {
            buf.push(format!("    {name}={expr},"));
        }
        buf.push(")".to_string());
    }

    fn resolve_output_file(&self, execution_symbol: &str, file_expr: &str) -> String {
        format!("{execution_symbol}.output_file({file_expr})")
    }

    fn struct_collect_outputs(&self, struct_param: &Param, struct_symbol: &str) -> String {
        if struct_param.is_list() {
            let mapped = format!(
                "[dyn_outputs(i[\"__STYXTYPE__\"])(i, execution) for i in {struct_symbol}]"
            );
            if struct_param.nullable {
                format!("({mapped} if {struct_symbol} is not None else None)")
            } else {
                mapped
            }
        } else {
            let base = format!(
                "dyn_outputs({struct_symbol}[\"__STYXTYPE__\"])({struct_symbol}, execution)"
            );
            if struct_param.nullable {
                format!("({base} if {struct_symbol} is not None else None)")
            } else {
                base
            }
        }
    }

    fn dyn_declare(&self, lookup: &Lookup, root_struct: &Param) -> Vec<GenericFunc> {
        let mut cargs_items = Vec::new();
        let mut outputs_items = Vec::new();
        collect_dyn_entries(lookup, root_struct, &mut cargs_items, &mut outputs_items);

        let cargs_func = GenericFunc {
            name: "dyn_cargs".to_string(),
            args: vec![GenericArg::new("t")],
            docstring_body: Some("Get build cargs function by command type.".to_string()),
            body: {
                let mut body = vec!["cargs_funcs = {".to_string()];
                for (key, value) in &cargs_items {
                    body.push(format!("    {key}: {value},"));
                }
                body.push("}".to_string());
                body.push("return cargs_funcs[t]".to_string());
                body
            },
            return_descr: Some("Build cargs function.".to_string()),
            return_type: Some("typing.Callable".to_string()),
        };

        let outputs_func = GenericFunc {
            name: "dyn_outputs".to_string(),
            args: vec![GenericArg::new("t")],
            docstring_body: Some("Get build outputs function by command type.".to_string()),
            body: {
                let mut body = vec!["outputs_funcs = {".to_string()];
                for (key, value) in &outputs_items {
                    body.push(format!("    {key}: {value},"));
                }
                body.push("}".to_string());
                body.push("return outputs_funcs[t]".to_string());
                body
            },
            return_descr: Some("Build outputs function.".to_string()),
            return_type: Some("typing.Callable".to_string()),
        };

        vec![cargs_func, outputs_func]
    }

    fn param_dict_type_declare(&self, lookup: &Lookup, struct_param: &Param) -> LineBuffer {
        let ParamBody::Struct { name, children, .. } = &struct_param.body else {
            return LineBuffer::new();
        };
        // A functional-syntax TypedDict, not a dataclass: field keys are the
        // raw descriptor names (which may not be legal Python identifiers),
        // subscripted the same way `param_dict_get`/`param_dict_set` do.
        let class_name = lookup.struct_type_of(struct_param.base.id);
        let mut fields = vec![format!("        \"__STYXTYPE__\": typing.Literal[\"{name}\"],")];
        for child in children {
            let field_ty = lookup.param_type_of(child.base.id);
            fields.push(format!("        \"{}\": {field_ty},", child.base.name));
        }
        let mut buf = vec![format!("{class_name} = typing.TypedDict("), format!("    \"{class_name}\","), "    {".to_string()];
        buf.extend(fields);
        buf.push("    },".to_string());
        buf.push(")".to_string());
        buf
    }

    fn param_dict_create(&self, name: &str, struct_param: &Param, items: &[(String, String)]) -> LineBuffer {
        let _ = struct_param;
        let mut buf = vec![format!("{name} = {{")];
        for (key, value) in items {
            buf.push(format!("    \"{key}\": {value},"));
        }
        buf.push("}".to_string());
        buf
    }

    fn param_dict_set(&self, dict_symbol: &str, param: &Param, value_expr: &str) -> LineBuffer {
        vec![format!("{dict_symbol}[\"{}\"] = {value_expr}", param.base.name)]
    }

    fn param_dict_get(&self, name: &str, param: &Param) -> String {
        format!("{name}[\"{}\"]", param.base.name)
    }

    fn param_dict_get_or_null(&self, name: &str, param: &Param) -> String {
        format!("{name}.get(\"{}\")", param.base.name)
    }

    fn raise_value_error(&self, message_expr: &str) -> LineBuffer {
        vec![format!("raise ValueError({message_expr})")]
    }
}

impl PythonLanguageProvider {
    fn function_docstring_and_body(&self, func: &GenericFunc, args: &[&GenericArg]) -> LineBuffer {
        let mut body = LineBuffer::new();
        if func.docstring_body.is_some() || args.iter().any(|a| a.docstring.is_some()) || func.return_descr.is_some() {
            body.push("\"\"\"".to_string());
            if let Some(summary) = &func.docstring_body {
                body.extend(linebreak_paragraph(summary, DOCSTRING_WIDTH, DOCSTRING_WIDTH));
            }
            if args.iter().any(|a| a.docstring.is_some()) {
                body.push(String::new());
                body.push("Args:".to_string());
                for arg in args {
                    if let Some(doc) = &arg.docstring {
                        body.push(format!("    {}: {doc}", arg.name));
                    }
                }
            }
            if let Some(descr) = &func.return_descr {
                body.push(String::new());
                body.push("Returns:".to_string());
                body.push(format!("    {descr}"));
            }
            body.push("\"\"\"".to_string());
        }
        body.extend(func.body.clone());
        if body.is_empty() {
            body.push("pass".to_string());
        }
        body
    }

    fn concat_scalars(&self, exprs: &[String], join: &str) -> String {
        use styx_provider::LanguageExprProvider;
        self.expr_concat_strs(exprs, join)
    }
}

fn collect_dyn_entries(
    lookup: &Lookup,
    param: &Param,
    cargs_items: &mut Vec<(String, String)>,
    outputs_items: &mut Vec<(String, String)>,
) {
    match &param.body {
        ParamBody::Struct { name, children, .. } => {
            let struct_type = lookup.struct_type_of(param.base.id);
            cargs_items.push((format!("\"{name}\""), format!("cargs_{}", snake_case(struct_type))));
            if styx_codegen::utils::struct_has_outputs(param) {
                outputs_items.push((format!("\"{name}\""), format!("outputs_{}", snake_case(struct_type))));
            }
            for child in children {
                collect_dyn_entries(lookup, child, cargs_items, outputs_items);
            }
        }
        ParamBody::StructUnion { alts } => {
            for alt in alts {
                collect_dyn_entries(lookup, alt, cargs_items, outputs_items);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use styx_codegen::GenericArg;

    use super::*;

    #[test]
    fn generate_func_sorts_defaulted_args_last() {
        let p = PythonLanguageProvider;
        let mut required = GenericArg::new("required");
        required.ty = Some("int".to_string());
        let mut defaulted = GenericArg::new("flag");
        defaulted.ty = Some("bool".to_string());
        defaulted.default = Some("False".to_string());
        let func = GenericFunc {
            name: "run".to_string(),
            args: vec![defaulted, required],
            docstring_body: None,
            body: vec!["pass".to_string()],
            return_descr: None,
            return_type: None,
        };
        let lines = p.generate_func(&func);
        assert!(lines[1].trim().starts_with("required:"));
    }

    #[test]
    fn cargs_declare_starts_empty() {
        let p = PythonLanguageProvider;
        assert_eq!(p.cargs_declare("cargs"), vec!["cargs: list[str] = []"]);
    }
}
