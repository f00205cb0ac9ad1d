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

//! The `init` subcommand.

use std::{fs, path::Path};

use askama::Template;
use clap::Parser;
use eyre::{Result, bail};
use thiserror::Error;

use crate::{
    config::{ALL_STEPS, RawConfig, config_file},
    hint, success,
};

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Force the init process.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `cz-config init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a cz-config.toml at this location")]
    ExistingConfig,
}

/// Parameters to generate a `cz-config.toml`.
///
/// Values are rendered to TOML beforehand, so the template only lays them out.
#[derive(Debug, Template)]
#[template(path = "cz-config.toml.jinja", escape = "none")]
struct ConfigFile {
    /// The subject limit.
    subject_limit: i64,
    /// Whether to allow custom scopes.
    allow_custom_scopes: bool,
    /// The types allowing breaking changes, as a TOML array.
    allow_breaking_changes: String,
    /// The skipped questions, as a TOML array.
    skip_questions: String,
    /// The commit types.
    types: Vec<TypeEntry>,
    /// The scope overrides.
    scope_overrides: Vec<Entry>,
    /// The configured messages.
    messages: Vec<Entry>,
}

/// A commit type, rendered to TOML.
#[derive(Debug)]
struct TypeEntry {
    /// The value, as a TOML string.
    value: String,
    /// The label, as a TOML string.
    name: String,
}

/// A key-value pair, rendered to TOML.
#[derive(Debug)]
struct Entry {
    /// The key.
    key: String,
    /// The value.
    value: String,
}

impl super::Command for Init {
    fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config_file = match config_path {
            Some(path) => path.to_owned(),
            None => config_file()?,
        };

        if !self.force && config_file.exists() {
            bail!(InitError::ExistingConfig);
        }

        let config = ConfigFile::from(&RawConfig::default());
        fs::write(&config_file, format!("{}\n", config.render()?))?;

        tracing::info!(?config_file, "configuration written");
        success!("A cz-config.toml has been created!");
        hint!("You can now edit it to adjust the configuration.");

        Ok(())
    }
}

impl From<&RawConfig> for ConfigFile {
    fn from(raw: &RawConfig) -> Self {
        Self {
            subject_limit: raw.subject_limit,
            allow_custom_scopes: raw.allow_custom_scopes,
            allow_breaking_changes: toml_array(
                raw.allow_breaking_changes.iter().map(String::as_str),
            ),
            skip_questions: toml_array(
                raw.skip_questions.iter().map(|step| step.id()),
            ),
            types: raw
                .types
                .iter()
                .map(|ty| TypeEntry {
                    value: toml_string(&ty.value),
                    name: toml_string(&ty.name),
                })
                .collect(),
            scope_overrides: raw
                .scope_overrides
                .iter()
                .map(|(ty, scopes)| Entry {
                    key: toml_key(ty),
                    value: scope_array(
                        scopes.iter().map(|scope| scope.name.as_str()),
                    ),
                })
                .collect(),
            messages: ALL_STEPS
                .into_iter()
                .filter_map(|step| {
                    raw.messages.get(step).map(|message| Entry {
                        key: step.id().to_owned(),
                        value: toml_string(message),
                    })
                })
                .collect(),
        }
    }
}

/// Renders a string as a TOML value.
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_owned()).to_string()
}

/// Renders a key, quoting it when it cannot be bare.
fn toml_key(key: &str) -> String {
    let is_bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if is_bare { key.to_owned() } else { toml_string(key) }
}

/// Renders a list of strings as a TOML array.
fn toml_array<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let array = items
        .map(|item| toml::Value::String(item.to_owned()))
        .collect();

    toml::Value::Array(array).to_string()
}

/// Renders a list of scopes as a TOML array of inline tables.
fn scope_array<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let scopes = names
        .map(|name| format!("{{ name = {} }}", toml_string(name)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{scopes}]")
}
