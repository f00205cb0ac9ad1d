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

//! The commit-type configuration.
//!
//! A [`Config`] is built once, either from `cz-config.toml` or from the
//! built-in configuration, and is then only queried. Building it validates
//! the invariants of the schema, so any `Config` value is consistent.

pub mod schema;

mod step;
mod validation;

pub use schema::{CommitType, Messages, RawConfig, Scope};
pub use step::{ALL_STEPS, CANONICAL_STEPS, PromptStep};
pub use validation::SchemaError;

use std::{
    fs, io,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process::Command,
};

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use crate::tracing::LogResult as _;

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path of the configuration file cannot be resolved.
    #[error("Failed to get the configuration file path")]
    ConfigFileError(#[from] ConfigFileError),
    /// The configuration file cannot be read.
    #[error("Failed to read {}", path.display())]
    ReadError {
        /// The path of the configuration file.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
    /// The configuration file is invalid.
    #[error("Invalid configuration in {}", path.display())]
    InvalidConfig {
        /// The path of the configuration file.
        path: PathBuf,
        /// The parsing or schema error.
        #[source]
        source: FromTomlError,
    },
    /// The built-in configuration is invalid.
    #[error("The built-in configuration is invalid")]
    InvalidBuiltin(#[from] SchemaError),
}

/// An error that can occur when parsing the TOML.
#[derive(Debug, Error)]
pub enum FromTomlError {
    /// The TOML does not match the schema.
    #[error("Failed to parse into a configuration")]
    ParseError(#[from] toml::de::Error),
    /// The configuration breaks an invariant of the schema.
    #[error("The configuration is inconsistent")]
    SchemaError(#[from] SchemaError),
}

/// An error that can occur when building the config file path.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The root of the Git repository cannot be found.
    #[error("Failed to get the Git repo root")]
    RepoRootError(#[from] RepoRootError),
}

/// An error that can occur when getting the Git repo root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of Git cannot be decoded.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

/// An error returned when a subject line is not acceptable.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The subject is longer than the limit.
    #[error(
        "The subject is {length} characters long, but the limit is {limit}"
    )]
    TooLong {
        /// The length of the subject, in characters.
        length: usize,
        /// The configured limit.
        limit: NonZeroUsize,
    },
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "cz-config.toml";

/// A validated commit-type configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The selectable commit types, in display order.
    types: Vec<CommitType>,
    /// Scope suggestions per commit type.
    scope_overrides: IndexMap<String, Vec<Scope>>,
    /// The prompt messages.
    messages: Messages,
    /// Whether free-text scopes are accepted.
    allow_custom_scopes: bool,
    /// The commit types for which a breaking change can be declared.
    allow_breaking_changes: IndexSet<String>,
    /// The prompt steps that are never asked.
    skip_questions: IndexSet<PromptStep>,
    /// The maximum number of characters in the subject line.
    subject_limit: NonZeroUsize,
}

/// What the scope step offers for a given commit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopePrompt<'a> {
    /// The scope is not asked.
    Skipped,
    /// Any scope can be typed.
    FreeText,
    /// A scope is selected from a list.
    Select {
        /// The suggested scopes, in order.
        scopes: Vec<&'a str>,
        /// Whether a scope that is not in the list can be typed.
        custom: bool,
    },
}

impl Config {
    /// Builds the built-in configuration.
    pub fn builtin() -> Result<Self, SchemaError> {
        RawConfig::default().try_into()
    }

    /// Loads the configuration of the repo or fallbacks to the built-in one.
    #[tracing::instrument(name = "load_config", level = "trace")]
    pub fn load() -> Result<Self, LoadError> {
        let config_file = config_file().log_err()?;

        match fs::read_to_string(&config_file) {
            Ok(config) => {
                tracing::debug!(?config_file, "loading the configuration");
                Self::from_toml(&config)
                    .map_err(|source| LoadError::InvalidConfig {
                        path: config_file,
                        source,
                    })
                    .log_err()
            }

            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    tracing::debug!(
                        ?config_file,
                        "no configuration file, using the built-in one"
                    );
                    Ok(Self::builtin().log_err()?)
                }
                _ => Err(LoadError::ReadError {
                    path: config_file,
                    source: error,
                })
                .log_err(),
            },
        }
    }

    /// Loads the configuration from the given file.
    #[tracing::instrument(name = "load_config_from", level = "trace")]
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let config = fs::read_to_string(path)
            .map_err(|source| LoadError::ReadError {
                path: path.to_owned(),
                source,
            })
            .log_err()?;

        Self::from_toml(&config)
            .map_err(|source| LoadError::InvalidConfig {
                path: path.to_owned(),
                source,
            })
            .log_err()
    }

    /// Builds the configuration from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, FromTomlError> {
        let raw: RawConfig = toml::from_str(toml)?;
        Ok(raw.try_into()?)
    }

    /// Returns the commit types, in display order.
    pub fn types(&self) -> &[CommitType] {
        &self.types
    }

    /// Returns the commit type with the given value, if it exists.
    pub fn find_type(&self, value: &str) -> Option<&CommitType> {
        self.types.iter().find(|ty| ty.value == value)
    }

    /// Returns the prompt messages as configured.
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns whether free-text scopes are accepted.
    pub const fn allow_custom_scopes(&self) -> bool {
        self.allow_custom_scopes
    }

    /// Returns the maximum number of characters in the subject line.
    pub const fn subject_limit(&self) -> NonZeroUsize {
        self.subject_limit
    }

    /// Returns whether a step is asked.
    pub fn is_asked(&self, step: PromptStep) -> bool {
        !self.skip_questions.contains(&step)
    }

    /// Returns the steps to ask, in order.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn prompt_steps(&self) -> Vec<PromptStep> {
        let steps: Vec<_> = CANONICAL_STEPS
            .into_iter()
            .filter(|step| self.is_asked(*step))
            .collect();

        tracing::trace!(?steps);
        steps
    }

    /// Returns the message to show for a step.
    ///
    /// Steps without a configured message get a default one.
    pub fn message(&self, step: PromptStep) -> &str {
        self.messages
            .get(step)
            .unwrap_or_else(|| step.default_message())
    }

    /// Returns the scope suggestions for a commit type.
    ///
    /// This is empty when no scopes are overridden for the type. Whether the
    /// user can type another scope is given by [`Self::allows_custom_scope`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn scopes_for(&self, type_value: &str) -> Vec<&str> {
        let scopes: Vec<&str> = self
            .scope_overrides
            .get(type_value)
            .map(|scopes| {
                scopes.iter().map(|scope| scope.name.as_str()).collect()
            })
            .unwrap_or_default();

        tracing::trace!(?scopes);
        scopes
    }

    /// Returns whether a scope that is not in the suggestions can be typed.
    pub fn allows_custom_scope(&self) -> bool {
        self.allow_custom_scopes && self.is_asked(PromptStep::CustomScope)
    }

    /// Returns what the scope step offers for a commit type.
    pub fn scope_prompt(&self, type_value: &str) -> ScopePrompt<'_> {
        if !self.is_asked(PromptStep::Scope) {
            return ScopePrompt::Skipped;
        }

        let scopes = self.scopes_for(type_value);
        let custom = self.allows_custom_scope();

        if !scopes.is_empty() {
            ScopePrompt::Select { scopes, custom }
        } else if custom {
            ScopePrompt::FreeText
        } else {
            ScopePrompt::Skipped
        }
    }

    /// Returns whether a breaking change can be declared for a commit type.
    pub fn allows_breaking(&self, type_value: &str) -> bool {
        self.allow_breaking_changes.contains(type_value)
    }

    /// Returns whether the breaking change step is asked for a commit type.
    pub fn asks_breaking(&self, type_value: &str) -> bool {
        self.is_asked(PromptStep::Breaking) && self.allows_breaking(type_value)
    }

    /// Checks the subject line against the subject limit.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn validate_subject(
        &self,
        subject: &str,
    ) -> Result<(), ValidationError> {
        let length = subject.chars().count();

        if length > self.subject_limit.get() {
            Err(ValidationError::TooLong {
                length,
                limit: self.subject_limit,
            })
        } else {
            Ok(())
        }
    }
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf, ConfigFileError> {
    Ok(repo_root()?.join(CONFIG_FILE_NAME))
}

/// Gets the root of the current Git repository.
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()?;

    if git_rev_parse.status.success() {
        let repo_root = String::from_utf8(git_rev_parse.stdout)?;
        Ok(PathBuf::from(repo_root.trim()))
    } else {
        let git_error = String::from_utf8(git_rev_parse.stderr)?;
        Err(RepoRootError::GitError(git_error.trim().to_owned()))
    }
}
