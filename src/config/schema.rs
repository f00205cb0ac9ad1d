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

//! Raw configuration schema, as written in `cz-config.toml`.
//!
//! The types in this module are a direct mapping of the file format. They do
//! not enforce any invariant: use [`Config`](super::Config) to get a validated
//! configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::PromptStep;

/// The configuration, as parsed from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    /// The selectable commit types, in display order.
    pub types: Vec<CommitType>,
    /// Scope suggestions per commit type.
    #[serde(default)]
    pub scope_overrides: IndexMap<String, Vec<Scope>>,
    /// The prompt messages.
    #[serde(default)]
    pub messages: Messages,
    /// Whether the user can type a scope that is not in the suggestions.
    #[serde(default)]
    pub allow_custom_scopes: bool,
    /// The commit types for which a breaking change can be declared.
    #[serde(default)]
    pub allow_breaking_changes: Vec<String>,
    /// The prompt steps that are never asked.
    #[serde(default)]
    pub skip_questions: Vec<PromptStep>,
    /// The maximum number of characters in the subject line.
    ///
    /// This is signed so that a negative limit is reported as a schema error
    /// instead of a parse error.
    pub subject_limit: i64,
}

/// A selectable commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitType {
    /// The identifier of the type, like `feat`.
    pub value: String,
    /// The label shown in the prompt.
    pub name: String,
}

/// A scope suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scope {
    /// The name of the scope.
    pub name: String,
}

/// Prompt messages, by prompt step.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Messages {
    /// Message for the `type` step.
    pub r#type: Option<String>,
    /// Message for the `scope` step.
    pub scope: Option<String>,
    /// Message for the `customScope` step.
    pub custom_scope: Option<String>,
    /// Message for the `subject` step.
    pub subject: Option<String>,
    /// Message for the `body` step.
    pub body: Option<String>,
    /// Message for the `breaking` step.
    pub breaking: Option<String>,
    /// Message for the `footer` step.
    pub footer: Option<String>,
    /// Message for the `confirmCommit` step.
    pub confirm_commit: Option<String>,
}

impl Messages {
    /// Returns the configured message for a step, if any.
    pub fn get(&self, step: PromptStep) -> Option<&str> {
        let message = match step {
            PromptStep::Type => &self.r#type,
            PromptStep::Scope => &self.scope,
            PromptStep::CustomScope => &self.custom_scope,
            PromptStep::Subject => &self.subject,
            PromptStep::Body => &self.body,
            PromptStep::Breaking => &self.breaking,
            PromptStep::Footer => &self.footer,
            PromptStep::ConfirmCommit => &self.confirm_commit,
        };

        message.as_deref()
    }
}

impl CommitType {
    /// Builds a commit type from its value and label.
    pub fn new(value: &str, name: &str) -> Self {
        Self {
            value: value.to_owned(),
            name: name.to_owned(),
        }
    }
}

impl Scope {
    /// Builds a scope suggestion.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl Default for RawConfig {
    /// The built-in configuration.
    fn default() -> Self {
        let types = [
            ("init", "🎉 init: \t 初始化项目"),
            ("feat", "✨ feat:\t添加新特性"),
            ("fix", "🐛 fix:\t修改bug"),
            ("merge", "🔀 merge:\t代码合并"),
            ("docs", "📝 docs:\t新增或更新文档"),
            (
                "style",
                "💄 style:\t格式（不影响代码运行的变动, 注意⚠️, 不是指css样式更改）",
            ),
            (
                "refactor",
                "♻️  refactor:\tCode 重构（即不是新增功能，也不是修改bug的代码变动）",
            ),
            ("perf", "⚡️ perf:\t性能提升"),
            ("test", "✅ test:\t增加测试用例"),
            ("chore", "🚚 chore:\t构建过程或辅助工具的变动"),
            ("revert", "⏪️ revert:\t回滚到上一个版本"),
            ("wip", "🚧 wip:\t正在开发中..."),
            ("ci", "💚 ci:\t添加或更新关于构建过程的信息"),
        ];

        let fix_scopes = ["merge", "style", "e2eTest", "unitTest"];

        Self {
            types: types
                .into_iter()
                .map(|(value, name)| CommitType::new(value, name))
                .collect(),
            scope_overrides: IndexMap::from([(
                String::from("fix"),
                fix_scopes.into_iter().map(Scope::new).collect(),
            )]),
            messages: Messages {
                r#type: Some(String::from("选择一种你的提交类型:")),
                subject: Some(String::from("短说明:\n")),
                breaking: Some(String::from("非兼容性说明 (可选):\n")),
                confirm_commit: Some(String::from("确定提交说明?(yes/no)")),
                ..Messages::default()
            },
            allow_custom_scopes: true,
            allow_breaking_changes: vec![
                String::from("feat"),
                String::from("fix"),
            ],
            skip_questions: vec![
                PromptStep::Body,
                PromptStep::Scope,
                PromptStep::Footer,
                PromptStep::CustomScope,
            ],
            subject_limit: 100,
        }
    }
}
