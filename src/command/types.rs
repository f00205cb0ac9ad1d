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

//! The `types` subcommand.

use std::path::Path;

use clap::Parser;
use eyre::Result;

use super::helpers::load_config;

/// The types command.
#[derive(Debug, Parser)]
pub struct Types {
    /// Print only the type values, without their label.
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl super::Command for Types {
    fn run(&self, config_path: Option<&Path>) -> Result<()> {
        let config = load_config(config_path)?;

        for ty in config.types() {
            if self.quiet {
                println!("{}", ty.value);
            } else {
                println!("{}", ty.name);
            }
        }

        Ok(())
    }
}
