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

pub mod helpers;

mod breaking;
mod check;
mod init;
mod scopes;
mod steps;
mod subject;
mod types;

use std::{
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use eyre::Result;
use indoc::indoc;
use itertools::Itertools as _;

use self::{
    breaking::Breaking,
    check::Check,
    helpers::{UnknownType, uncapitalise},
    init::{Init, InitError},
    scopes::Scopes,
    steps::Steps,
    subject::Subject,
    types::Types,
};
use crate::{
    config::{LoadError, ValidationError},
    error, hint,
    tracing::setup_tracing,
};

/// Help shown after the list of commands.
const AFTER_HELP: &str = indoc! {"
    Without --config, the configuration is read from cz-config.toml at the root
    of the Git repository. When this file does not exist, the built-in
    configuration is used.

    Set CZ_CONFIG_LOG (for instance CZ_CONFIG_LOG=debug) to enable logging.
"};

/// Commit types, scopes and prompts for conventional commits.
#[derive(Debug, Parser)]
#[command(author, version, after_help = AFTER_HELP)]
pub struct CzConfig {
    /// Use this configuration file instead of the one in the repository.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: CzCommand,
}

/// The cz-config commands.
#[derive(Debug, Subcommand)]
enum CzCommand {
    /// Writes the built-in configuration to cz-config.toml.
    Init(Init),
    /// Checks the configuration.
    Check(Check),
    /// Lists the commit types.
    Types(Types),
    /// Lists the prompt steps that are asked, with their message.
    Steps(Steps),
    /// Lists the scope suggestions for a commit type.
    Scopes(Scopes),
    /// Tells whether a breaking change can be declared for a commit type.
    Breaking(Breaking),
    /// Checks a subject line against the subject limit.
    Subject(Subject),
}

trait Command {
    /// Runs the command.
    fn run(&self, config_path: Option<&Path>) -> Result<()>;
}

impl CzConfig {
    /// Runs cz-config.
    pub fn run() -> Result<()> {
        setup_tracing();

        let cz_config = Self::parse();
        let config_path = cz_config.config.as_deref();

        let result = match &cz_config.command {
            CzCommand::Init(init) => init.run(config_path),
            CzCommand::Check(check) => check.run(config_path),
            CzCommand::Types(types) => types.run(config_path),
            CzCommand::Steps(steps) => steps.run(config_path),
            CzCommand::Scopes(scopes) => scopes.run(config_path),
            CzCommand::Breaking(breaking) => breaking.run(config_path),
            CzCommand::Subject(subject) => subject.run(config_path),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<ValidationError>() {
        match e {
            ValidationError::TooLong { .. } => {
                error!("{e}");
                hint!("Keep the subject short and use the body for details.");
            }
        }
        process::exit(exitcode::DATAERR);
    } else if let Some(e) = e.downcast_ref::<UnknownType>() {
        error!("{e}");
        hint!("Valid types are: {}.", e.valid.iter().join(", "));
        process::exit(exitcode::USAGE);
    } else if let Some(load_error) = e.downcast_ref::<LoadError>() {
        error!("{load_error}");
        for cause in e.chain().skip(1) {
            hint!("Caused by: {}", uncapitalise(&cause.to_string()));
        }
        process::exit(exitcode::CONFIG);
    } else if let Some(e) = e.downcast_ref::<InitError>() {
        match e {
            InitError::ExistingConfig => {
                error!("{e}");
                hint!("You can force the command by running `cz-config init -f`.");
            }
        }
        process::exit(1);
    } else {
        Err(e)
    }
}
