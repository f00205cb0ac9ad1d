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

//! Tests for loading, validating and querying the configuration.

#![allow(clippy::pedantic, clippy::restriction)]

use std::path::PathBuf;

use cz_config::config::{
    CANONICAL_STEPS, Config, FromTomlError, LoadError, PromptStep, SchemaError,
    ScopePrompt, ValidationError,
};
use eyre::Result;
use indoc::indoc;

////////////////////////////////////////////////////////////////////////////////
//                                  Helpers                                   //
////////////////////////////////////////////////////////////////////////////////

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("res")
        .join("config")
        .join(name)
}

fn schema_error(name: &str) -> SchemaError {
    match Config::load_from(&config_path(name)) {
        Err(LoadError::InvalidConfig {
            source: FromTomlError::SchemaError(error),
            ..
        }) => error,
        other => panic!("expected a schema error, got {other:?}"),
    }
}

////////////////////////////////////////////////////////////////////////////////
//                                  Built-in                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn builtin_config_has_the_expected_types_in_order() -> Result<()> {
    let config = Config::builtin()?;

    let values: Vec<_> =
        config.types().iter().map(|ty| ty.value.as_str()).collect();

    assert_eq!(values.len(), 13);
    assert_eq!(
        values,
        [
            "init", "feat", "fix", "merge", "docs", "style", "refactor",
            "perf", "test", "chore", "revert", "wip", "ci"
        ]
    );
    assert_eq!(config.find_type("feat").unwrap().name, "✨ feat:\t添加新特性");
    assert_eq!(
        config.find_type("init").unwrap().name,
        "🎉 init: \t 初始化项目"
    );

    Ok(())
}

#[test]
fn builtin_config_overrides_scopes_for_fix() -> Result<()> {
    let config = Config::builtin()?;

    assert_eq!(
        config.scopes_for("fix"),
        ["merge", "style", "e2eTest", "unitTest"]
    );
    assert!(config.scopes_for("feat").is_empty());

    Ok(())
}

#[test]
fn builtin_config_allows_breaking_changes_for_feat_and_fix_only()
-> Result<()> {
    let config = Config::builtin()?;

    assert!(config.allows_breaking("feat"));
    assert!(config.allows_breaking("fix"));
    assert!(!config.allows_breaking("docs"));
    assert!(!config.allows_breaking("unknown"));

    Ok(())
}

#[test]
fn builtin_config_skips_body_scope_and_footer() -> Result<()> {
    let config = Config::builtin()?;

    assert_eq!(
        config.prompt_steps(),
        [
            PromptStep::Type,
            PromptStep::Subject,
            PromptStep::Breaking,
            PromptStep::ConfirmCommit
        ]
    );
    assert!(!config.is_asked(PromptStep::CustomScope));

    Ok(())
}

#[test]
fn builtin_config_limits_subjects_to_100_characters() -> Result<()> {
    let config = Config::builtin()?;

    assert_eq!(config.subject_limit().get(), 100);
    assert!(config.validate_subject(&"a".repeat(100)).is_ok());
    assert!(matches!(
        config.validate_subject(&"a".repeat(101)),
        Err(ValidationError::TooLong {
            length: 101,
            ..
        })
    ));

    Ok(())
}

#[test]
fn builtin_config_has_messages_for_the_asked_steps() -> Result<()> {
    let config = Config::builtin()?;

    assert_eq!(config.message(PromptStep::Type), "选择一种你的提交类型:");
    assert_eq!(config.message(PromptStep::Subject), "短说明:\n");
    assert_eq!(config.message(PromptStep::Breaking), "非兼容性说明 (可选):\n");
    assert_eq!(
        config.message(PromptStep::ConfirmCommit),
        "确定提交说明?(yes/no)"
    );

    Ok(())
}

#[test]
fn builtin_config_does_not_ask_for_a_scope() -> Result<()> {
    let config = Config::builtin()?;

    assert_eq!(config.scope_prompt("fix"), ScopePrompt::Skipped);
    assert!(config.allow_custom_scopes());
    assert!(!config.allows_custom_scope());

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//                                   Loading                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn minimal_config_uses_defaults() -> Result<()> {
    let config = Config::load_from(&config_path("valid-minimal.toml"))?;

    assert_eq!(config.types().len(), 2);
    assert_eq!(config.subject_limit().get(), 50);
    assert!(!config.allow_custom_scopes());
    assert!(!config.allows_breaking("feat"));
    assert_eq!(config.prompt_steps(), CANONICAL_STEPS);
    assert_eq!(
        config.message(PromptStep::Type),
        PromptStep::Type.default_message()
    );

    Ok(())
}

#[test]
fn missing_file_is_a_read_error() {
    let missing = config_path("does-not-exist.toml");
    let result = Config::load_from(&missing);

    assert!(matches!(
        result,
        Err(LoadError::ReadError { path, .. }) if path == missing
    ));
}

#[test]
fn read_error_names_the_file() {
    let missing = config_path("custom.toml");
    let error = Config::load_from(&missing).unwrap_err();

    assert_eq!(
        error.to_string(),
        format!("Failed to read {}", missing.display())
    );
}

#[test]
fn unknown_prompt_step_is_a_parse_error() {
    let result = Config::load_from(&config_path("invalid-unknown-step.toml"));
    assert!(matches!(
        result,
        Err(LoadError::InvalidConfig {
            source: FromTomlError::ParseError(_),
            ..
        })
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    let toml = indoc! {r#"
        subjectLimit = 100
        upperCaseSubject = true

        [[types]]
        value = "feat"
        name = "feat"
    "#};

    assert!(matches!(
        Config::from_toml(toml),
        Err(FromTomlError::ParseError(_))
    ));
}

#[test]
fn missing_subject_limit_is_a_parse_error() {
    let toml = indoc! {r#"
        [[types]]
        value = "feat"
        name = "feat"
    "#};

    assert!(matches!(
        Config::from_toml(toml),
        Err(FromTomlError::ParseError(_))
    ));
}

////////////////////////////////////////////////////////////////////////////////
//                                 Invariants                                 //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn duplicate_types_are_rejected() {
    assert!(matches!(
        schema_error("invalid-duplicate-type.toml"),
        SchemaError::DuplicateType { value } if value == "feat"
    ));
}

#[test]
fn scope_overrides_for_unknown_types_are_rejected() {
    assert!(matches!(
        schema_error("invalid-scope-override.toml"),
        SchemaError::UnknownScopeOverride { value } if value == "style"
    ));
}

#[test]
fn breaking_changes_for_unknown_types_are_rejected() {
    assert!(matches!(
        schema_error("invalid-breaking-type.toml"),
        SchemaError::UnknownBreakingType { value } if value == "refactor"
    ));
}

#[test]
fn zero_subject_limit_is_rejected() {
    assert!(matches!(
        schema_error("invalid-subject-limit.toml"),
        SchemaError::InvalidSubjectLimit { limit: 0 }
    ));
}

#[test]
fn negative_subject_limit_is_rejected() {
    let toml = indoc! {r#"
        subjectLimit = -1

        [[types]]
        value = "feat"
        name = "feat"
    "#};

    assert!(matches!(
        Config::from_toml(toml),
        Err(FromTomlError::SchemaError(SchemaError::InvalidSubjectLimit {
            limit: -1
        }))
    ));
}

#[test]
fn empty_type_list_is_rejected() {
    let toml = indoc! {r#"
        subjectLimit = 100
        types = []
    "#};

    assert!(matches!(
        Config::from_toml(toml),
        Err(FromTomlError::SchemaError(SchemaError::NoTypes))
    ));
}

#[test]
fn empty_type_value_is_rejected() {
    let toml = indoc! {r#"
        subjectLimit = 100

        [[types]]
        value = "feat"
        name = "feat"

        [[types]]
        value = ""
        name = "nothing"
    "#};

    assert!(matches!(
        Config::from_toml(toml),
        Err(FromTomlError::SchemaError(SchemaError::EmptyTypeValue {
            index: 2
        }))
    ));
}

////////////////////////////////////////////////////////////////////////////////
//                                   Queries                                  //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn prompt_steps_keep_the_canonical_order() -> Result<()> {
    let toml = indoc! {r#"
        subjectLimit = 100
        skipQuestions = ["confirmCommit", "subject", "type"]

        [[types]]
        value = "feat"
        name = "feat"
    "#};

    let config = Config::from_toml(toml)?;

    assert_eq!(
        config.prompt_steps(),
        [
            PromptStep::Scope,
            PromptStep::Body,
            PromptStep::Breaking,
            PromptStep::Footer
        ]
    );

    Ok(())
}

#[test]
fn scope_prompt_offers_the_overrides_and_free_text() -> Result<()> {
    let config = Config::load_from(&config_path("valid-custom-scopes.toml"))?;

    assert_eq!(
        config.scope_prompt("feat"),
        ScopePrompt::Select {
            scopes: vec!["parser", "cli"],
            custom: true
        }
    );
    assert_eq!(config.scope_prompt("fix"), ScopePrompt::FreeText);

    Ok(())
}

#[test]
fn scope_prompt_is_skipped_without_overrides_nor_custom_scopes() -> Result<()>
{
    let toml = indoc! {r#"
        subjectLimit = 100

        [scopeOverrides]
        feat = [{ name = "parser" }]

        [[types]]
        value = "feat"
        name = "feat"

        [[types]]
        value = "fix"
        name = "fix"
    "#};

    let config = Config::from_toml(toml)?;

    assert_eq!(
        config.scope_prompt("feat"),
        ScopePrompt::Select {
            scopes: vec!["parser"],
            custom: false
        }
    );
    assert_eq!(config.scope_prompt("fix"), ScopePrompt::Skipped);

    Ok(())
}

#[test]
fn breaking_step_is_asked_only_for_allowed_types() -> Result<()> {
    let config = Config::load_from(&config_path("valid-custom-scopes.toml"))?;

    assert!(config.asks_breaking("feat"));
    assert!(!config.asks_breaking("fix"));

    Ok(())
}

#[test]
fn breaking_step_is_not_asked_when_skipped() -> Result<()> {
    let toml = indoc! {r#"
        subjectLimit = 100
        allowBreakingChanges = ["feat"]
        skipQuestions = ["breaking"]

        [[types]]
        value = "feat"
        name = "feat"
    "#};

    let config = Config::from_toml(toml)?;

    assert!(config.allows_breaking("feat"));
    assert!(!config.asks_breaking("feat"));

    Ok(())
}

#[test]
fn subject_length_is_counted_in_characters() -> Result<()> {
    let config = Config::load_from(&config_path("valid-minimal.toml"))?;

    // 50 characters, but more than 50 bytes.
    let subject = "é".repeat(50);

    assert!(subject.len() > 50);
    assert!(config.validate_subject(&subject).is_ok());
    assert!(config.validate_subject(&format!("{subject}é")).is_err());
    assert!(config.validate_subject("").is_ok());

    Ok(())
}

#[test]
fn configured_messages_override_the_defaults() -> Result<()> {
    let config = Config::load_from(&config_path("valid-custom-scopes.toml"))?;

    assert_eq!(config.message(PromptStep::Type), "Select the type:");
    assert_eq!(config.message(PromptStep::Subject), "Subject:\n");
    assert_eq!(config.messages().breaking, None);
    assert_eq!(
        config.message(PromptStep::Breaking),
        PromptStep::Breaking.default_message()
    );

    Ok(())
}
