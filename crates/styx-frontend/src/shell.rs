// SPDX-License-Identifier: MIT OR Apache-2.0

//! POSIX-ish shell word splitting for the `command-line` template (spec §6).

use crate::error::FrontendError;

/// Split `template` into whitespace-separated words, honouring single and
/// double quoting and backslash escapes, per spec §6. A `null` template
/// (modelled here as the caller never calling this with one — see
/// [`FrontendError::NullCommandLine`]) is a hard error rather than reading
/// from a terminal; this function itself only ever sees a concrete string.
pub fn split_command_line(template: &str) -> Result<Vec<String>, FrontendError> {
    shell_words::split(template).map_err(|e| FrontendError::InvalidShellSyntax {
        template: template.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            split_command_line("dummy [X] [Y]").unwrap(),
            vec!["dummy", "[X]", "[Y]"]
        );
    }

    #[test]
    fn honours_quoting() {
        assert_eq!(
            split_command_line("dummy \"[X] [Y]\"").unwrap(),
            vec!["dummy", "[X] [Y]"]
        );
    }

    #[test]
    fn rejects_unbalanced_quotes() {
        assert!(split_command_line("dummy \"[X]").is_err());
    }
}
