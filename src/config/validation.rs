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

//! Validation of a raw configuration.

use std::num::NonZeroUsize;

use indexmap::IndexSet;
use itertools::Itertools as _;
use thiserror::Error;

use super::{Config, schema::RawConfig};

/// An error in the structure of the configuration.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// There is no commit type.
    #[error("No commit type is defined")]
    NoTypes,
    /// A commit type has an empty value.
    #[error("The commit type at position {index} has an empty value")]
    EmptyTypeValue {
        /// The position of the type in the list, starting at 1.
        index: usize,
    },
    /// The same value is used by several commit types.
    #[error("The commit type `{value}` is defined more than once")]
    DuplicateType {
        /// The duplicated value.
        value: String,
    },
    /// Scopes are overridden for a type that does not exist.
    #[error("Scopes are overridden for the unknown commit type `{value}`")]
    UnknownScopeOverride {
        /// The unknown type.
        value: String,
    },
    /// Breaking changes are allowed for a type that does not exist.
    #[error(
        "Breaking changes are allowed for the unknown commit type `{value}`"
    )]
    UnknownBreakingType {
        /// The unknown type.
        value: String,
    },
    /// The subject limit is not a positive integer.
    #[error("The subject limit must be a positive integer, got {limit}")]
    InvalidSubjectLimit {
        /// The configured limit.
        limit: i64,
    },
}

impl TryFrom<RawConfig> for Config {
    type Error = SchemaError;

    #[tracing::instrument(name = "validate_config", level = "trace", skip_all)]
    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.types.is_empty() {
            return Err(SchemaError::NoTypes);
        }

        if let Some(position) =
            raw.types.iter().position(|ty| ty.value.is_empty())
        {
            return Err(SchemaError::EmptyTypeValue {
                index: position + 1,
            });
        }

        if let Some(value) =
            raw.types.iter().map(|ty| &ty.value).duplicates().next()
        {
            return Err(SchemaError::DuplicateType {
                value: value.clone(),
            });
        }

        let type_exists =
            |value: &str| raw.types.iter().any(|ty| ty.value == value);

        if let Some(value) =
            raw.scope_overrides.keys().find(|value| !type_exists(value))
        {
            return Err(SchemaError::UnknownScopeOverride {
                value: value.clone(),
            });
        }

        if let Some(value) = raw
            .allow_breaking_changes
            .iter()
            .find(|value| !type_exists(value))
        {
            return Err(SchemaError::UnknownBreakingType {
                value: value.clone(),
            });
        }

        let subject_limit = usize::try_from(raw.subject_limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(SchemaError::InvalidSubjectLimit {
                limit: raw.subject_limit,
            })?;

        tracing::debug!(
            types = raw.types.len(),
            %subject_limit,
            "the configuration is valid"
        );

        Ok(Self {
            types: raw.types,
            scope_overrides: raw.scope_overrides,
            messages: raw.messages,
            allow_custom_scopes: raw.allow_custom_scopes,
            allow_breaking_changes: raw
                .allow_breaking_changes
                .into_iter()
                .collect::<IndexSet<_>>(),
            skip_questions: raw.skip_questions.into_iter().collect(),
            subject_limit,
        })
    }
}
