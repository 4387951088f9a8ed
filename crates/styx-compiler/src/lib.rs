// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # styx-compiler
//!
//! The interface compiler driver (spec §4.3): walks every struct reachable
//! from a normalized [`styx_ir::Interface`]'s root and, for one target
//! language's [`LanguageProvider`], emits the seven artifacts named in
//! spec §4.3 (parameter-dictionary type declarations, `build_params`,
//! `build_cargs`, `build_outputs`, `execute`, the public wrapper function,
//! and the `dyn_cargs`/`dyn_outputs` dispatch tables), assembled into one
//! rendered module plus a package entry module re-exporting it.

/// Per-struct `cargs_*` function emission.
pub mod cargs;
/// Driver failure modes (spec §7).
pub mod error;
/// Root-only `execute_*` function emission.
pub mod execute;
/// Per-interface symbol/type table construction.
pub mod lookup;
/// The driver's unit of output.
pub mod module;
/// Per-struct `outputs_*` function emission.
pub mod outputs;
/// Per-struct `params_*` function emission.
pub mod params;
/// Root-only public wrapper function emission.
pub mod wrapper;

pub use error::CompileError;
pub use module::Module;

use styx_codegen::{snake_case, GenericModule, GenericModuleItem, LineBuffer};
use styx_ir::visit::iter_structs_recursively;
use styx_ir::{Interface, ParamBody};
use styx_provider::LanguageProvider;
use tracing::debug;

use crate::cargs::build_cargs_func;
use crate::execute::{build_execute_func, root_capture_member_fields, root_capture_members};
use crate::lookup::{build_lookup, index_params};
use crate::outputs::{build_outputs_func, build_outputs_structure};
use crate::params::build_params_func;
use crate::wrapper::build_wrapper_func;

/// Compile one normalized `interface` into `provider`'s target language:
/// one rendered module implementing every struct's `params_*`/`cargs_*`
/// functions, every output-bearing struct's `outputs_*` function, the
/// root's `execute_*` and public wrapper functions, the dynamic-dispatch
/// tables, and the per-struct parameter-dictionary type declarations
/// (spec §4.3, §4.5).
///
/// No partial emission on failure: the first [`CompileError`] aborts
/// before any module text is returned.
pub fn compile_interface(interface: &Interface, provider: &dyn LanguageProvider) -> Result<Module, CompileError> {
    if !matches!(interface.root.body, ParamBody::Struct { .. }) {
        return Err(CompileError::InvalidDescriptor {
            name: interface.root.base.name.clone(),
        });
    }

    let lookup = build_lookup(interface, provider);
    let params_by_id = index_params(interface);
    let structs = iter_structs_recursively(&interface.root, true);

    debug!(
        package = %interface.package.name,
        structs = structs.len(),
        language_ext = provider.file_extension(),
        "compiling interface"
    );

    let mut header = LineBuffer::new();
    let mut items = Vec::new();

    for (i, s) in structs.iter().enumerate() {
        let is_root = i == 0;
        header.extend(provider.param_dict_type_declare(&lookup, s));

        if is_root || styx_codegen::utils::struct_has_outputs(s) {
            let extra_fields = if is_root { root_capture_member_fields(provider, interface) } else { Vec::new() };
            let structure = build_outputs_structure(&lookup, provider, s, &params_by_id, &extra_fields)?;
            items.push(GenericModuleItem::Structure(structure));
        }

        items.push(GenericModuleItem::Func(build_params_func(&lookup, provider, s)));
        items.push(GenericModuleItem::Func(build_cargs_func(&lookup, provider, s)));

        if is_root || styx_codegen::utils::struct_has_outputs(s) {
            let extra_members = if is_root { root_capture_members(provider, interface) } else { Vec::new() };
            items.push(GenericModuleItem::Func(build_outputs_func(
                &lookup,
                provider,
                s,
                &params_by_id,
                &extra_members,
            )?));
        }
    }

    for dispatch_func in provider.dyn_declare(&lookup, &interface.root) {
        items.push(GenericModuleItem::Func(dispatch_func));
    }

    let metadata_symbol = provider.metadata_symbol(&interface.package.name);
    header.extend(provider.generate_metadata(&metadata_symbol, &metadata_entries(provider, interface)));

    items.push(GenericModuleItem::Func(build_execute_func(&lookup, provider, &interface.root, interface)));
    let wrapper_func = build_wrapper_func(&lookup, provider, &interface.root, interface);
    let wrapper_name = wrapper_func.name.clone();
    items.push(GenericModuleItem::Func(wrapper_func));

    let mut exports = vec![wrapper_name, metadata_symbol];
    for s in &structs {
        exports.push(lookup.struct_type_of(s.base.id).to_string());
        if let Some(output_type) = lookup.output_type.get(&s.base.id) {
            exports.push(output_type.clone());
        }
    }

    let module = GenericModule {
        imports: provider.wrapper_module_imports(),
        header,
        items,
        footer: LineBuffer::new(),
        exports,
        docstr: interface.package.docs.title.clone(),
    };

    let text = styx_codegen::linebuffer::collapse(&provider.generate_module(&module));
    let text = format!("{text}\n");
    let module_name = snake_case(&interface.package.name);

    Ok(Module {
        text,
        path: vec![format!("{module_name}.{}", provider.file_extension())],
    })
}

/// Compile the package entry module re-exporting `interface_module_names`
/// (spec §6: "the package's entry module, whose text consists of
/// re-export statements").
#[must_use]
pub fn compile_package_entry(interface_module_names: &[String], provider: &dyn LanguageProvider) -> Module {
    let text = styx_codegen::linebuffer::collapse(&provider.generate_reexport_module(interface_module_names));
    let text = format!("{text}\n");
    Module {
        text,
        path: vec![format!("__init__.{}", provider.file_extension())],
    }
}

fn metadata_entries(provider: &dyn LanguageProvider, interface: &Interface) -> Vec<(String, String)> {
    let mut entries = vec![
        ("id".to_string(), provider.expr_str(&interface.uid)),
        ("name".to_string(), provider.expr_str(&interface.package.name)),
    ];
    let container_type = if interface.package.container_image.is_some() {
        provider.expr_str("docker")
    } else {
        provider.expr_null()
    };
    entries.push(("container_image_type".to_string(), container_type));
    let container_tag = interface
        .package
        .container_image
        .as_deref()
        .map(|img| provider.expr_str(img))
        .unwrap_or_else(|| provider.expr_null());
    entries.push(("container_image_tag".to_string(), container_tag));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use styx_ir::{Documentation, IdGen, Interface, Package, Param, ParamBase};
    use styx_provider_python::PythonLanguageProvider;

    fn trivial_interface() -> Interface {
        let mut ids = IdGen::new();
        let root = Param::new(
            ParamBase::new(ids.next(), "dummy"),
            ParamBody::Struct {
                name: "dummy".to_string(),
                groups: vec![],
                children: vec![],
                mutex_groups: vec![],
                docs: Documentation::empty(),
            },
        );
        Interface {
            uid: "abc123.boutiques".to_string(),
            package: Package::new("dummy"),
            root,
            stdout: None,
            stderr: None,
        }
    }

    #[test]
    fn non_struct_root_is_rejected() {
        let mut interface = trivial_interface();
        interface.root.body = ParamBody::String;
        let provider = PythonLanguageProvider;
        let err = compile_interface(&interface, &provider).unwrap_err();
        assert!(matches!(err, CompileError::InvalidDescriptor { .. }));
    }

    #[test]
    fn trivial_interface_compiles_to_one_python_module() {
        let interface = trivial_interface();
        let provider = PythonLanguageProvider;
        let module = compile_interface(&interface, &provider).unwrap();
        assert_eq!(module.path, vec!["dummy.py".to_string()]);
        assert!(module.text.contains("def dummy("));
        assert!(module.text.contains("def params_dummy("));
        assert!(module.text.contains("def cargs_dummy("));
        assert!(module.text.contains("def execute_dummy("));
        assert!(module.text.contains("DUMMY_METADATA = Metadata("));
    }

    #[test]
    fn outputs_record_type_is_declared_before_it_is_used() {
        let interface = trivial_interface();
        let provider = PythonLanguageProvider;
        let module = compile_interface(&interface, &provider).unwrap();
        assert!(module.text.contains("class DummyOutputs:"));
        let class_pos = module.text.find("class DummyOutputs:").unwrap();
        let use_pos = module.text.find("-> DummyOutputs").unwrap();
        assert!(class_pos < use_pos, "DummyOutputs must be declared before it is referenced");
        assert!(module.text.contains("ret = DummyOutputs("));
    }

    #[test]
    fn package_entry_reexports_interface_modules() {
        let provider = PythonLanguageProvider;
        let entry = compile_package_entry(&["dummy".to_string()], &provider);
        assert_eq!(entry.path, vec!["__init__.py".to_string()]);
        assert!(entry.text.contains("from .dummy import *"));
    }
}
