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

//! Commit types, scopes and prompts for conventional commits.
//!
//! This crate holds the configuration a commit prompt needs: the selectable
//! commit types, scope suggestions, prompt messages and the subject limit. The
//! configuration is read from `cz-config.toml` at the root of the repository,
//! or taken from the built-in one, and validated when loaded.
//!
//! ```
//! use cz_config::config::{Config, PromptStep};
//!
//! let config = Config::builtin()?;
//!
//! assert!(config.allows_breaking("feat"));
//! assert!(!config.is_asked(PromptStep::Body));
//! assert!(config.validate_subject("add a parser").is_ok());
//! # Ok::<(), cz_config::config::SchemaError>(())
//! ```

pub mod config;

mod command;
mod tracing;

pub use command::CzConfig;
