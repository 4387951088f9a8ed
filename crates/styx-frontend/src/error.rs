// SPDX-License-Identifier: MIT OR Apache-2.0

//! Frontend failure modes (spec §4.1 "Failure modes", §7).

use thiserror::Error;

/// Everything that can go wrong lowering a descriptor into [`styx_ir::Interface`].
///
/// Every variant carries the smallest identifying context available at the
/// point of failure (spec §7 policy): an input/output id where one is
/// known, otherwise a free-text reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrontendError {
    /// A required field (`name`/`id`, `type`, …) is missing.
    #[error("descriptor is missing required field `{field}`")]
    MissingField {
        /// The missing field's name.
        field: String,
        /// Id of the input/output/descriptor node, if known.
        context: Option<String>,
    },
    /// `type` names a primitive this frontend does not understand.
    #[error("input `{id}` has unknown type `{type_name}`")]
    UnknownType {
        /// The offending input's id.
        id: String,
        /// The unrecognised type name.
        type_name: String,
    },
    /// `value-choices` contains an element whose runtime type disagrees
    /// with the input's declared primitive (e.g. a string choice on an
    /// integer input).
    #[error("input `{id}` has a value-choices entry incompatible with its declared type")]
    ChoicesTypeMismatch {
        /// The offending input's id.
        id: String,
    },
    /// The `command-line` template is `null` rather than a string — a hard
    /// error rather than "read from stdin" (spec §6 "Shell splitting").
    #[error("command-line template is null; a descriptor must supply a command-line string")]
    NullCommandLine,
    /// The `command-line` template could not be shell-split (unbalanced
    /// quoting, trailing backslash, …).
    #[error("command-line template `{template}` is not valid shell syntax: {reason}")]
    InvalidShellSyntax {
        /// The offending template string.
        template: String,
        /// The underlying splitter's error message.
        reason: String,
    },
    /// A Boutiques `groups` entry references a member id that does not
    /// correspond to any input declared in the same scope.
    #[error("group `{group}` references unknown member id `{member}`")]
    UnknownGroupMember {
        /// The group's id.
        group: String,
        /// The unresolved member id.
        member: String,
    },
    /// A Flag-typed input has no `command-line-flag`.
    #[error("flag input `{id}` has no command-line-flag")]
    FlagWithoutCommandLineFlag {
        /// The offending input's id.
        id: String,
    },
    /// A numeric default value falls outside the input's declared bounds.
    #[error("input `{id}` has a default value that violates its declared bounds")]
    DefaultOutOfBounds {
        /// The offending input's id.
        id: String,
    },
}
