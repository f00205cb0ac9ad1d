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

//! The `scopes` subcommand.

use std::path::Path;

use clap::Parser;
use eyre::Result;

use crate::{config::ScopePrompt, hint};

use super::helpers::{find_type, load_config};

/// The scopes command.
#[derive(Debug, Parser)]
pub struct Scopes {
    /// The commit type, like `fix`.
    r#type: String,
}

impl super::Command for Scopes {
    fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config = load_config(config_path)?;
        let ty = find_type(&config, &self.r#type)?;

        for scope in config.scopes_for(&ty.value) {
            println!("{scope}");
        }

        match config.scope_prompt(&ty.value) {
            ScopePrompt::Skipped => hint!("The scope is not asked."),
            ScopePrompt::FreeText => hint!("Any scope can be typed."),
            ScopePrompt::Select { custom: true, .. } => {
                hint!("A scope is selected from the list, or typed.");
            }
            ScopePrompt::Select { custom: false, .. } => {
                hint!("A scope is selected from the list.");
            }
        }

        Ok(())
    }
}
