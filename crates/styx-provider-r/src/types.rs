// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_ir::Choices;
use styx_provider::LanguageTypeProvider;

use crate::RLanguageProvider;

impl LanguageTypeProvider for RLanguageProvider {
    fn type_str(&self) -> String {
        "character".to_string()
    }

    fn type_int(&self) -> String {
        "integer".to_string()
    }

    fn type_float(&self) -> String {
        "numeric".to_string()
    }

    fn type_bool(&self) -> String {
        "logical".to_string()
    }

    fn type_input_path(&self) -> String {
        "character".to_string()
    }

    fn type_output_path(&self) -> String {
        "character".to_string()
    }

    fn type_runner(&self) -> String {
        "Runner".to_string()
    }

    fn type_execution(&self) -> String {
        "Execution".to_string()
    }

    fn type_literal_union(&self, choices: &Choices) -> String {
        use styx_provider::LanguageExprProvider;
        let rendered: Vec<String> = match choices {
            Choices::Strings(values) => values.iter().map(|v| self.expr_str(v)).collect(),
            Choices::Ints(values) => values.iter().map(|v| self.expr_int(*v)).collect(),
        };
        format!("Union[{}]", rendered.join(", "))
    }

    fn type_list(&self, type_element: &str) -> String {
        format!("vector[{type_element}]")
    }

    fn type_optional(&self, type_element: &str) -> String {
        format!("nullable[{type_element}]")
    }

    fn type_union(&self, type_elements: &[String]) -> String {
        format!("Union[{}]", type_elements.join(", "))
    }

    fn type_string_list(&self) -> String {
        "character".to_string()
    }
}
