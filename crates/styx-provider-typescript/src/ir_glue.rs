// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_codegen::{snake_case, LineBuffer};
use styx_ir::{Param, ParamBody};
use styx_provider::{LanguageExprProvider, LanguageHighLevelProvider, LanguageIrProvider, Lookup, MStr};

use crate::TypeScriptLanguageProvider;

impl LanguageIrProvider for TypeScriptLanguageProvider {
    fn param_var_to_mstr(&self, param: &Param, symbol: &str) -> MStr {
        let is_list = param.is_list();
        match &param.body {
            ParamBody::String => {
                if is_list {
                    MStr::list(symbol.to_string())
                } else {
                    MStr::scalar(symbol.to_string())
                }
            }
            ParamBody::Int { .. } | ParamBody::Float { .. } => {
                if is_list {
                    MStr::list(format!("{symbol}.map(String)"))
                } else {
                    MStr::scalar(format!("String({symbol})"))
                }
            }
            ParamBody::File { .. } => {
                if is_list {
                    MStr::list(format!("{symbol}.map(f => execution.inputFile(f))"))
                } else {
                    MStr::scalar(format!("execution.inputFile({symbol})"))
                }
            }
            ParamBody::Bool { value_true, value_false } => {
                let true_list = self.expr_list(&value_true.iter().map(|t| self.expr_str(t)).collect::<Vec<_>>());
                let false_list = self.expr_list(&value_false.iter().map(|t| self.expr_str(t)).collect::<Vec<_>>());
                MStr::list(format!("({symbol} ? {true_list} : {false_list})"))
            }
            ParamBody::Struct { .. } | ParamBody::StructUnion { .. } => {
                MStr::list(format!("dynCargs({symbol}[\"__STYXTYPE__\"])({symbol}, execution)"))
            }
        }
    }

    fn param_var_is_set_by_user(&self, param: &Param, symbol: &str) -> Option<String> {
        if param.nullable {
            return Some(format!("({symbol} !== null && {symbol} !== undefined)"));
        }
        if let ParamBody::Bool { value_true, value_false } = &param.body {
            if !value_true.is_empty() && value_false.is_empty() {
                return Some(symbol.to_string());
            }
            if value_true.is_empty() && !value_false.is_empty() {
                return Some(format!("!{symbol}"));
            }
        }
        None
    }

    fn build_params_and_execute(&self, lookup: &Lookup, struct_param: &Param, execution_symbol: &str) -> LineBuffer {
        let ParamBody::Struct { children, .. } = &struct_param.body else {
            return LineBuffer::new();
        };
        let _ = execution_symbol;
        let items: Vec<(String, String)> = children
            .iter()
            .map(|child| (child.base.name.clone(), lookup.symbol_of(child.base.id).to_string()))
            .collect();
        self.param_dict_create("params", struct_param, &items)
    }

    fn call_build_params(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        arg_exprs: &[(String, String)],
        return_symbol: &str,
    ) -> LineBuffer {
        let ParamBody::Struct { children, .. } = &struct_param.body else {
            unreachable!("call_build_params called on a non-Struct param");
        };
        let struct_type = lookup.struct_type_of(struct_param.base.id);
        // `params_*`'s declaration (generate_func) stable-sorts its args so
        // defaulted ones come last; this call must reorder the same way,
        // since plain TS functions have no keyword-argument call syntax.
        let mut ordered: Vec<&(String, String)> = arg_exprs.iter().collect();
        ordered.sort_by_key(|(name, _)| {
            children
                .iter()
                .find(|c| lookup.symbol_of(c.base.id) == name)
                .is_some_and(|c| self.param_default_value(c).is_some())
        });
        let args: Vec<&str> = ordered.iter().map(|(_, expr)| expr.as_str()).collect();
        vec![format!("const {return_symbol} = params_{}({});", snake_case(struct_type), args.join(", "))]
    }

    fn call_build_cargs(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer {
        let struct_type = lookup.struct_type_of(struct_param.base.id);
        vec![format!(
            "const {return_symbol} = cargs_{}({params_symbol}, {execution_symbol});",
            snake_case(struct_type)
        )]
    }

    fn call_build_outputs(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer {
        let struct_type = lookup.struct_type_of(struct_param.base.id);
        vec![format!(
            "const {return_symbol} = outputs_{}({params_symbol}, {execution_symbol});",
            snake_case(struct_type)
        )]
    }

    fn call_build_execute(
        &self,
        lookup: &Lookup,
        struct_param: &Param,
        params_symbol: &str,
        execution_symbol: &str,
        return_symbol: &str,
    ) -> LineBuffer {
        let struct_type = lookup.struct_type_of(struct_param.base.id);
        vec![format!(
            "const {return_symbol} = execute_{}({params_symbol}, {execution_symbol});",
            snake_case(struct_type)
        )]
    }
}

#[cfg(test)]
mod tests {
    use styx_ir::{IdGen, ParamBase};

    use super::*;

    #[test]
    fn nullable_param_is_set_by_null_check() {
        let p = TypeScriptLanguageProvider;
        let mut ids = IdGen::new();
        let id = ids.next();
        let mut param = Param::new(ParamBase::new(id, "thresh"), ParamBody::String);
        param.nullable = true;
        assert_eq!(
            p.param_var_is_set_by_user(&param, "thresh"),
            Some("(thresh !== null && thresh !== undefined)".to_string())
        );
    }

    #[test]
    fn bare_flag_is_set_by_truthiness() {
        let p = TypeScriptLanguageProvider;
        let mut ids = IdGen::new();
        let id = ids.next();
        let param = Param::new(
            ParamBase::new(id, "verbose"),
            ParamBody::Bool {
                value_true: vec!["--verbose".to_string()],
                value_false: vec![],
            },
        );
        assert_eq!(p.param_var_is_set_by_user(&param, "verbose"), Some("verbose".to_string()));
    }

    #[test]
    fn struct_mstr_dispatches_dynamically() {
        let p = TypeScriptLanguageProvider;
        let mut ids = IdGen::new();
        let id = ids.next();
        let param = Param::new(
            ParamBase::new(id, "sub"),
            ParamBody::Struct {
                name: "sub".to_string(),
                groups: vec![],
                children: vec![],
                mutex_groups: vec![],
                docs: styx_ir::Documentation::empty(),
            },
        );
        let mstr = p.param_var_to_mstr(&param, "sub");
        assert!(mstr.is_list);
        assert!(mstr.expr.contains("dynCargs"));
    }
}
