// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_ir::Choices;
use styx_provider::LanguageTypeProvider;

use crate::TypeScriptLanguageProvider;

impl LanguageTypeProvider for TypeScriptLanguageProvider {
    fn type_str(&self) -> String {
        "string".to_string()
    }

    fn type_int(&self) -> String {
        "number".to_string()
    }

    fn type_float(&self) -> String {
        "number".to_string()
    }

    fn type_bool(&self) -> String {
        "boolean".to_string()
    }

    fn type_input_path(&self) -> String {
        "InputPathType".to_string()
    }

    fn type_output_path(&self) -> String {
        "OutputPathType".to_string()
    }

    fn type_runner(&self) -> String {
        "Runner".to_string()
    }

    fn type_execution(&self) -> String {
        "Execution".to_string()
    }

    fn type_literal_union(&self, choices: &Choices) -> String {
        let rendered: Vec<String> = match choices {
            Choices::Strings(values) => values.iter().map(|v| format!("\"{v}\"")).collect(),
            Choices::Ints(values) => values.iter().map(i64::to_string).collect(),
        };
        rendered.join(" | ")
    }

    fn type_list(&self, type_element: &str) -> String {
        format!("Array<{type_element}>")
    }

    fn type_optional(&self, type_element: &str) -> String {
        format!("{type_element} | null")
    }

    fn type_union(&self, type_elements: &[String]) -> String {
        type_elements.join(" | ")
    }

    fn type_string_list(&self) -> String {
        "string[]".to_string()
    }
}
