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

//! The `breaking` subcommand.

use std::path::Path;

use clap::Parser;
use eyre::Result;

use crate::{config::PromptStep, hint};

use super::helpers::{find_type, load_config};

/// The breaking command.
#[derive(Debug, Parser)]
pub struct Breaking {
    /// The commit type, like `feat`.
    r#type: String,
}

impl super::Command for Breaking {
    fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config = load_config(config_path)?;
        let ty = find_type(&config, &self.r#type)?;

        if config.allows_breaking(&ty.value) {
            println!("yes");

            if !config.is_asked(PromptStep::Breaking) {
                hint!("The breaking step is skipped, so it is never asked.");
            }
        } else {
            println!("no");
        }

        Ok(())
    }
}
