// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::utils::enquote;
use styx_codegen::{linebuffer, snake_case, GenericArg, GenericFunc, GenericModule, GenericModuleItem, GenericStructure, LineBuffer};
use styx_ir::{Param, ParamBody};
use styx_provider::{LanguageExprProvider, LanguageHighLevelProvider, Lookup, MStr};

use crate::TypeScriptLanguageProvider;

impl LanguageHighLevelProvider for TypeScriptLanguageProvider {
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
        let type_annotation = arg.ty.as_deref().map(|t| format!(": {t}")).unwrap_or_default();
        match &arg.default {
            Some(default) => format!("{}{type_annotation} = {default}", arg.name),
            None => format!("{}{type_annotation}", arg.name),
        }
    }

    fn generate_func(&self, func: &GenericFunc) -> LineBuffer {
        let mut args: Vec<&GenericArg> = func.args.iter().collect();
        args.sort_by_key(|a| a.default.is_some());
        let return_type = func.return_type.as_deref().map(|t| format!(": {t}")).unwrap_or_default();
        let mut buf = vec![format!("function {}(", func.name)];
        for arg in &args {
            buf.push(format!("    {},", self.generate_arg_declaration(arg)));
        }
        buf.push(format!("){return_type} {{"));

        let mut doc = LineBuffer::new();
        if func.docstring_body.is_some() || !args.is_empty() || func.return_descr.is_some() {
            doc.push("/**".to_string());
            if let Some(body) = &func.docstring_body {
                doc.extend(body.lines().map(|l| format!(" * {l}")));
            }
            for arg in &args {
                if let Some(d) = &arg.docstring {
                    doc.push(format!(" * @param {} {d}", arg.name));
                }
            }
            if let Some(descr) = &func.return_descr {
                doc.push(format!(" * @returns {descr}"));
            }
            doc.push(" */".to_string());
        }
        buf.extend(linebuffer::indent(&doc, 1));

        let body = if func.body.is_empty() { vec!["return;".to_string()] } else { func.body.clone() };
        buf.extend(linebuffer::indent(&body, 1));
        buf.push("}".to_string());
        buf
    }

    fn generate_structure(&self, structure: &GenericStructure) -> LineBuffer {
        let mut fields: Vec<&GenericArg> = structure.fields.iter().collect();
        fields.sort_by_key(|f| f.default.is_some());

        let mut buf = vec!["/**".to_string()];
        if let Some(doc) = &structure.docstring {
            buf.extend(doc.lines().map(|l| format!(" * {l}")));
            buf.push(" *".to_string());
        }
        buf.push(" * @interface".to_string());
        buf.push(" */".to_string());
        buf.push(format!("interface {} {{", structure.name));

        for field in &fields {
            if let Some(doc) = &field.docstring {
                buf.extend(linebuffer::indent(&vec!["/**".to_string(), format!(" * {doc}"), " */".to_string()], 1));
            }
            let optional = if field.default.is_some() { "?" } else { "" };
            let ty = field.ty.as_deref().unwrap_or("unknown");
            buf.extend(linebuffer::indent(&vec![format!("{}{optional}: {ty};", field.name)], 1));
        }
        buf.push("}".to_string());
        buf
    }

    fn generate_module(&self, module: &GenericModule) -> LineBuffer {
        let mut buf = LineBuffer::new();
        if let Some(docstr) = &module.docstr {
            buf.push("/**".to_string());
            buf.extend(docstr.lines().map(|l| format!(" * {l}")));
            buf.push(" */".to_string());
        }
        buf.extend(self.expr_line_comment(&vec![
            "This file was auto generated by Styx.".to_string(),
            "Do not edit this file directly.".to_string(),
        ]));
        buf = linebuffer::blank_after(&buf, 1);
        buf.extend(linebuffer::blank_before(&module.imports, 0));
        buf.extend(module.header.clone());
        for item in &module.items {
            buf.push(String::new());
            buf.push(String::new());
            buf.extend(match item {
                GenericModuleItem::Func(f) => self.generate_func(f),
                GenericModuleItem::Structure(s) => self.generate_structure(s),
            });
        }
        buf.extend(module.footer.clone());
        if !module.exports.is_empty() {
            buf.push(String::new());
            buf.push(String::new());
            buf.push("export {".to_string());
            let mut sorted = module.exports.clone();
            sorted.sort();
            for name in sorted {
                buf.push(format!("    {name},"));
            }
            buf.push("};".to_string());
        }
        buf
    }

    fn return_statement(&self, value: &str) -> String {
        format!("return {value};")
    }

    fn wrapper_module_imports(&self) -> LineBuffer {
        vec![
            "import * as path from 'path';".to_string(),
            "import { Runner, Execution, Metadata, InputPathType, OutputPathType } from './types';".to_string(),
            "import { getGlobalRunner } from './runner';".to_string(),
        ]
    }

    fn generate_reexport_module(&self, interface_module_names: &[String]) -> LineBuffer {
        let mut buf = vec![
            "// This file was auto generated by Styx.".to_string(),
            "// Do not edit this file directly.".to_string(),
        ];
        for name in interface_module_names {
            buf.push(format!("export * from './{name}';"));
        }
        buf
    }

    fn metadata_symbol(&self, interface_base_name: &str) -> String {
        format!("{}_METADATA", styx_codegen::screaming_snake_case(interface_base_name))
    }

    fn generate_metadata(&self, metadata_symbol: &str, entries: &[(String, String)]) -> LineBuffer {
        let mut buf = vec![format!("const {metadata_symbol}: Metadata = {{")];
        for (key, value) in entries {
            buf.push(format!("    {key}: {value},"));
        }
        buf.push("};".to_string());
        buf
    }

    fn cargs_symbol(&self) -> String {
        "cargs".to_string()
    }

    fn cargs_declare(&self, cargs_symbol: &str) -> LineBuffer {
        vec![format!("const {cargs_symbol}: string[] = [];")]
    }

    fn mstr_cargs_add(&self, cargs_symbol: &str, values: &[MStr]) -> LineBuffer {
        if values.len() == 1 {
            let v = &values[0];
            return if v.is_list {
                vec![format!("{cargs_symbol}.push(...{});", v.expr)]
            } else {
                vec![format!("{cargs_symbol}.push({});", v.expr)]
            };
        }
        let mut buf = vec![format!("{cargs_symbol}.push(")];
        for v in values {
            let element = if v.is_list { format!("...{}", v.expr) } else { v.expr.clone() };
            buf.push(format!("    {element},"));
        }
        buf.push(");".to_string());
        buf
    }

    fn mstr_collapse(&self, mstr: &MStr, join: &str) -> MStr {
        if !mstr.is_list {
            return mstr.clone();
        }
        MStr::scalar(format!("{}.join({})", mstr.expr, self.expr_str(join)))
    }

    fn mstr_concat(&self, mstrs: &[MStr], inner_join: &str, outer_join: &str) -> MStr {
        let inner: Vec<String> = mstrs.iter().map(|m| self.mstr_collapse(m, inner_join).expr).collect();
        MStr::scalar(self.expr_concat_strs(&inner, outer_join))
    }

    fn mstr_empty_literal_like(&self, mstr: &MStr) -> String {
        if mstr.is_list { "[]".to_string() } else { "\"\"".to_string() }
    }

    fn runner_symbol(&self) -> String {
        "runner".to_string()
    }

    fn runner_declare(&self, runner_symbol: &str) -> LineBuffer {
        vec![format!("const {runner_symbol} = {runner_symbol} || getGlobalRunner();")]
    }

    fn symbol_execution(&self) -> String {
        "execution".to_string()
    }

    fn execution_declare(&self, execution_symbol: &str, metadata_symbol: &str) -> LineBuffer {
        vec![format!("const {execution_symbol} = runner.startExecution({metadata_symbol});")]
    }

    fn execution_process_params(&self, execution_symbol: &str, params_symbol: &str) -> LineBuffer {
        vec![format!("{params_symbol} = {execution_symbol}.params({params_symbol});")]
    }

    fn execution_run(
        &self,
        execution_symbol: &str,
        cargs_symbol: &str,
        stdout_output_symbol: Option<&str>,
        stderr_output_symbol: Option<&str>,
    ) -> LineBuffer {
        let stdout = stdout_output_symbol
            .map(|s| format!(", handleStdout: s => ret.{s}.push(s)"))
            .unwrap_or_default();
        let stderr = stderr_output_symbol
            .map(|s| format!(", handleStderr: s => ret.{s}.push(s)"))
            .unwrap_or_default();
        vec![format!("{execution_symbol}.run({cargs_symbol}{stdout}{stderr});")]
    }

    fn generate_ret_object_creation(
        &self,
        buf: &mut LineBuffer,
        execution_symbol: &str,
        output_type: &str,
        members: &[(String, String)],
    ) {
        buf.push(format!("const ret: {output_type} = {{"));
        buf.push(format!("    root: {execution_symbol}.outputFile(\".\"),"));
        for (name, expr) in members {
            buf.push(format!("    {name}: {expr},"));
        }
        buf.push("};".to_string());
    }

    fn resolve_output_file(&self, execution_symbol: &str, file_expr: &str) -> String {
        format!("{execution_symbol}.outputFile({file_expr})")
    }

    fn struct_collect_outputs(&self, struct_param: &Param, struct_symbol: &str) -> String {
        if struct_param.is_list() {
            let mapped = format!("{struct_symbol}.map(i => dynOutputs(i.__STYXTYPE__)?.(i, execution) ?? null)");
            if struct_param.nullable { format!("({mapped} ?? null)") } else { mapped }
        } else {
            let base = format!("dynOutputs({struct_symbol}.__STYXTYPE__)?.({struct_symbol}, execution)");
            if struct_param.nullable { format!("({base} ?? null)") } else { base }
        }
    }

    fn dyn_declare(&self, lookup: &Lookup, root_struct: &Param) -> Vec<GenericFunc> {
        let mut cargs_items = Vec::new();
        let mut outputs_items = Vec::new();
        collect_dyn_entries(lookup, root_struct, &mut cargs_items, &mut outputs_items);

        let cargs_func = GenericFunc {
            name: "dynCargs".to_string(),
            args: vec![GenericArg {
                name: "t".to_string(),
                ty: Some("string".to_string()),
                default: None,
                docstring: Some("Command type".to_string()),
            }],
            docstring_body: Some("Get build cargs function by command type.".to_string()),
            body: {
                let mut body = vec!["const cargsFuncs = {".to_string()];
                for (key, value) in &cargs_items {
                    body.push(format!("    {key}: {value},"));
                }
                body.push("};".to_string());
                body.push("return cargsFuncs[t];".to_string());
                body
            },
            return_descr: Some("Build cargs function.".to_string()),
            return_type: Some("Function | undefined".to_string()),
        };

        let outputs_func = GenericFunc {
            name: "dynOutputs".to_string(),
            args: vec![GenericArg {
                name: "t".to_string(),
                ty: Some("string".to_string()),
                default: None,
                docstring: Some("Command type".to_string()),
            }],
            docstring_body: Some("Get build outputs function by command type.".to_string()),
            body: {
                let mut body = vec!["const outputsFuncs = {".to_string()];
                for (key, value) in &outputs_items {
                    body.push(format!("    {key}: {value},"));
                }
                body.push("};".to_string());
                body.push("return outputsFuncs[t];".to_string());
                body
            },
            return_descr: Some("Build outputs function.".to_string()),
            return_type: Some("Function | undefined".to_string()),
        };

        vec![cargs_func, outputs_func]
    }

    fn param_dict_type_declare(&self, lookup: &Lookup, struct_param: &Param) -> LineBuffer {
        let ParamBody::Struct { name, children, .. } = &struct_param.body else {
            return LineBuffer::new();
        };
        let dict_symbol = lookup.struct_type_of(struct_param.base.id);
        let mut buf = vec![format!("interface {dict_symbol} {{")];
        buf.push(format!("    \"__STYXTYPE__\": \"{name}\";"));
        for child in children {
            let mut ty = lookup.param_type_of(child.base.id).to_string();
            if child.nullable {
                ty = format!("{ty} | undefined");
            }
            buf.push(format!("    {}: {ty};", self.expr_str(&child.base.name)));
        }
        buf.push("}".to_string());
        buf
    }

    fn param_dict_create(&self, name: &str, struct_param: &Param, items: &[(String, String)]) -> LineBuffer {
        let type_tag = struct_param.body.struct_name().unwrap_or_default();
        let mut buf = vec![format!("const {name} = {{")];
        buf.push(format!("    \"__STYXTYPE__\": {} as const,", self.expr_str(type_tag)));
        for (key, value) in items {
            buf.push(format!("    {}: {value},", self.expr_str(key)));
        }
        buf.push("};".to_string());
        buf
    }

    fn param_dict_set(&self, dict_symbol: &str, param: &Param, value_expr: &str) -> LineBuffer {
        vec![format!("{dict_symbol}[{}] = {value_expr};", self.expr_str(&param.base.name))]
    }

    fn param_dict_get(&self, name: &str, param: &Param) -> String {
        format!("{name}[{}]", self.expr_str(&param.base.name))
    }

    fn param_dict_get_or_null(&self, name: &str, param: &Param) -> String {
        format!("({name}[{}] ?? null)", self.expr_str(&param.base.name))
    }

    fn raise_value_error(&self, message_expr: &str) -> LineBuffer {
        vec![format!("throw new Error({message_expr});")]
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
    use super::*;

    #[test]
    fn cargs_declare_uses_const() {
        let p = TypeScriptLanguageProvider;
        assert_eq!(p.cargs_declare("cargs"), vec!["const cargs: string[] = [];"]);
    }
}
