//! Interactive RPG character creation.
//!
//! Values given as flags are used as-is; the rest are asked for. On a
//! terminal the prompts go through dialoguer and re-ask on bad numbers,
//! otherwise lines are read from stdin in order.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use primer::character::{
    create_character_from_value, parse_stat, CharacterDraft, CharacterError, CharacterInput,
    CharacterSheet, Field, InputError,
};
use primer::config::Config;

use super::ui::{Output, OutputMode};
use super::Outcome;

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CharacterArgs {
    pub name: Option<String>,
    pub strength: Option<String>,
    pub intelligence: Option<String>,
    pub charisma: Option<String>,
    pub from_file: Option<PathBuf>,
}

/// Create a character from flags, prompts, or a JSON file.
pub fn cmd_character(args: CharacterArgs, config: &Config, output: &Output) -> Result<Outcome> {
    if let Some(path) = &args.from_file {
        return character_from_file(path, output);
    }

    let interactive = atty::is(atty::Stream::Stdin) && output.mode() == OutputMode::Human;
    let stdin = io::stdin();
    run_character(args, config, output, &mut stdin.lock(), interactive)
}

/// Core of `primer character`, with the input source injected.
pub(crate) fn run_character<R: BufRead>(
    args: CharacterArgs,
    config: &Config,
    output: &Output,
    reader: &mut R,
    interactive: bool,
) -> Result<Outcome> {
    info!(interactive, "character creation started");
    output.info(&config.character.welcome);

    let draft = match draft_from_args(&args) {
        Ok(draft) => draft,
        Err(e) => return input_failure(e, output),
    };

    let filled = if interactive {
        prompt_missing(draft)
    } else {
        draft.fill_from_lines(reader, &mut output.prompt_writer())
    };
    let input = match filled {
        Ok(input) => input,
        Err(e) => return input_failure(e, output),
    };

    Ok(report(input.create(), output))
}

fn draft_from_args(args: &CharacterArgs) -> Result<CharacterDraft, InputError> {
    let mut draft = CharacterDraft::default();
    let given = [
        (Field::Name, &args.name),
        (Field::Strength, &args.strength),
        (Field::Intelligence, &args.intelligence),
        (Field::Charisma, &args.charisma),
    ];
    for (field, value) in given {
        if let Some(raw) = value {
            draft.set(field, raw)?;
        }
    }
    Ok(draft)
}

/// Ask for each missing field on the terminal.
fn prompt_missing(mut draft: CharacterDraft) -> Result<CharacterInput, InputError> {
    for field in draft.missing() {
        let prompt = field.prompt().trim_end_matches(": ");
        let raw: String = match field {
            Field::Name => dialoguer::Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(dialoguer_io)?,
            _ => dialoguer::Input::new()
                .with_prompt(prompt)
                .validate_with(|text: &String| -> Result<(), String> {
                    parse_stat(field, text).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(dialoguer_io)?,
        };
        draft.set(field, &raw)?;
    }
    draft.finish()
}

fn dialoguer_io(err: dialoguer::Error) -> InputError {
    InputError::Io(io::Error::new(io::ErrorKind::Other, err))
}

fn character_from_file(path: &Path, output: &Output) -> Result<Outcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read character from {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    debug!(path = %path.display(), "validating character from file");
    Ok(report(create_character_from_value(&value), output))
}

fn report(result: Result<CharacterSheet, CharacterError>, output: &Output) -> Outcome {
    match result {
        Ok(sheet) => {
            let text = sheet.to_string();
            let mut value = serde_json::to_value(&sheet).unwrap_or_default();
            value["sheet"] = serde_json::Value::String(text.clone());
            output.result(&text, &value);
            Outcome::Accepted
        }
        Err(e) => {
            output.rejection(&e.to_string());
            Outcome::Rejected
        }
    }
}

fn input_failure(err: InputError, output: &Output) -> Result<Outcome> {
    match err {
        InputError::Io(e) => Err(e).context("Failed to read character input"),
        other => {
            output.error(&other.to_string());
            Ok(Outcome::InvalidInput)
        }
    }
}
