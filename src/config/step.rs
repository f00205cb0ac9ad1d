// cz-config - Commit types, scopes and prompts for conventional commits.
// Copyright (C) 2026 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Prompt steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A step in the commit prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum PromptStep {
    /// Selection of the commit type.
    Type,
    /// Selection of the scope.
    Scope,
    /// Free-text entry of a scope that is not in the suggestions.
    CustomScope,
    /// The subject line.
    Subject,
    /// The long description.
    Body,
    /// The breaking change description.
    Breaking,
    /// The footer, like closed issues.
    Footer,
    /// The final confirmation.
    ConfirmCommit,
}

/// The steps of the prompt, in the order they are asked.
///
/// [`PromptStep::CustomScope`] is not listed: it is a follow-up of
/// [`PromptStep::Scope`].
pub const CANONICAL_STEPS: [PromptStep; 7] = [
    PromptStep::Type,
    PromptStep::Scope,
    PromptStep::Subject,
    PromptStep::Body,
    PromptStep::Breaking,
    PromptStep::Footer,
    PromptStep::ConfirmCommit,
];

/// All the prompt steps.
pub const ALL_STEPS: [PromptStep; 8] = [
    PromptStep::Type,
    PromptStep::Scope,
    PromptStep::CustomScope,
    PromptStep::Subject,
    PromptStep::Body,
    PromptStep::Breaking,
    PromptStep::Footer,
    PromptStep::ConfirmCommit,
];

impl PromptStep {
    /// Returns the identifier of the step, as used in the configuration.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::CustomScope => "customScope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Breaking => "breaking",
            Self::Footer => "footer",
            Self::ConfirmCommit => "confirmCommit",
        }
    }

    /// Returns the message used when none is configured.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Type => "Select the type of change that you're committing:",
            Self::Scope => "Denote the SCOPE of this change (optional):",
            Self::CustomScope => "Denote the SCOPE of this change:",
            Self::Subject => {
                "Write a SHORT, IMPERATIVE tense description of the change:\n"
            }
            Self::Body => {
                "Provide a LONGER description of the change (optional). \
                 Use \"|\" to break new line:\n"
            }
            Self::Breaking => "List any BREAKING CHANGES (optional):\n",
            Self::Footer => {
                "List any ISSUES CLOSED by this change (optional). \
                 E.g.: #31, #34:\n"
            }
            Self::ConfirmCommit => {
                "Are you sure you want to proceed with the commit above?"
            }
        }
    }
}

impl fmt::Display for PromptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
