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

//! The `check` subcommand.

use std::path::Path;

use clap::Parser;
use eyre::Result;

use crate::{config::PromptStep, success, warning};

use super::helpers::load_config;

/// The check command.
#[derive(Debug, Parser)]
pub struct Check;

impl super::Command for Check {
    fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config = load_config(config_path)?;

        if config.allow_custom_scopes()
            && !config.is_asked(PromptStep::CustomScope)
        {
            warning!(
                "allowCustomScopes is set, but customScope is in skipQuestions."
            );
        }

        success!(
            "The configuration is valid: {} commit types, subjects up to {} \
             characters.",
            config.types().len(),
            config.subject_limit()
        );

        Ok(())
    }
}
