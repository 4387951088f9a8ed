// SPDX-License-Identifier: MIT OR Apache-2.0

use styx_ir::Choices;
use styx_provider::LanguageTypeProvider;

use crate::PythonLanguageProvider;

impl LanguageTypeProvider for PythonLanguageProvider {
    fn type_str(&self) -> String {
        "str".to_string()
    }

    fn type_int(&self) -> String {
        "int".to_string()
    }

    fn type_float(&self) -> String {
        "float".to_string()
    }

    fn type_bool(&self) -> String {
        "bool".to_string()
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
        format!("typing.Literal[{}]", rendered.join(", "))
    }

    fn type_list(&self, type_element: &str) -> String {
        format!("list[{type_element}]")
    }

    fn type_optional(&self, type_element: &str) -> String {
        format!("{type_element} | None")
    }

    fn type_union(&self, type_elements: &[String]) -> String {
        type_elements.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use styx_ir::Choices;

    use super::*;

    #[test]
    fn literal_union_renders_strings_quoted() {
        let p = PythonLanguageProvider;
        let choices = Choices::Strings(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(p.type_literal_union(&choices), "typing.Literal[\"a\", \"b\"]");
    }
}
