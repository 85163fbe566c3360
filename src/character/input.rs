//! Reading character fields from text input.
//!
//! Numeric fields arrive as text. Text that does not parse as an integer
//! becomes an [`InputError::InvalidStat`] instead of aborting, so callers can
//! re-prompt or report it.

use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use super::stats::{create_character, CharacterError, CharacterSheet};

/// One of the four values a character is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Strength,
    Intelligence,
    Charisma,
}

impl Field {
    /// Fields in the order they are asked for.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Strength,
        Field::Intelligence,
        Field::Charisma,
    ];

    /// Prompt text shown before reading this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Name => "Enter the character name: ",
            Field::Strength => "Enter the strength: ",
            Field::Intelligence => "Enter the intelligence: ",
            Field::Charisma => "Enter the charisma: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Strength => write!(f, "strength"),
            Field::Intelligence => write!(f, "intelligence"),
            Field::Charisma => write!(f, "charisma"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be a whole number, got {input:?}")]
    InvalidStat { field: Field, input: String },

    #[error("no value given for {0}")]
    Missing(Field),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Parse a stat typed by the user. Surrounding whitespace is ignored.
pub fn parse_stat(field: Field, input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidStat {
            field,
            input: input.to_string(),
        })
}

/// Character values collected so far. `None` means "still to be asked".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: Option<String>,
    pub strength: Option<i64>,
    pub intelligence: Option<i64>,
    pub charisma: Option<i64>,
}

/// A draft with every value filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterInput {
    pub name: String,
    pub strength: i64,
    pub intelligence: i64,
    pub charisma: i64,
}

impl CharacterInput {
    /// Run the validation checks on the collected values.
    pub fn create(&self) -> Result<CharacterSheet, CharacterError> {
        create_character(&self.name, self.strength, self.intelligence, self.charisma)
    }
}

impl CharacterDraft {
    /// Fields that still need a value, in prompt order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Name => self.name.is_none(),
                Field::Strength => self.strength.is_none(),
                Field::Intelligence => self.intelligence.is_none(),
                Field::Charisma => self.charisma.is_none(),
            })
            .collect()
    }

    /// Store raw text for `field`, parsing it when the field is a stat.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), InputError> {
        match field {
            Field::Name => self.name = Some(raw.to_string()),
            Field::Strength => self.strength = Some(parse_stat(field, raw)?),
            Field::Intelligence => self.intelligence = Some(parse_stat(field, raw)?),
            Field::Charisma => self.charisma = Some(parse_stat(field, raw)?),
        }
        Ok(())
    }

    /// Turn the draft into a complete input, or name the first missing field.
    pub fn finish(self) -> Result<CharacterInput, InputError> {
        Ok(CharacterInput {
            name: self.name.ok_or(InputError::Missing(Field::Name))?,
            strength: self.strength.ok_or(InputError::Missing(Field::Strength))?,
            intelligence: self
                .intelligence
                .ok_or(InputError::Missing(Field::Intelligence))?,
            charisma: self.charisma.ok_or(InputError::Missing(Field::Charisma))?,
        })
    }

    /// Fill the missing fields one line at a time from `reader`.
    ///
    /// Each prompt is written to `prompts` (pass `io::sink()` to hide them).
    /// Only the line terminator is stripped, so a name keeps any spaces the
    /// user typed and is judged by the validation checks.
    pub fn fill_from_lines<R: BufRead, W: Write>(
        mut self,
        reader: &mut R,
        prompts: &mut W,
    ) -> Result<CharacterInput, InputError> {
        for field in self.missing() {
            write!(prompts, "{}", field.prompt())?;
            prompts.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Err(InputError::Missing(field));
            }
            let raw = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line.as_str());
            self.set(field, raw)?;
        }
        self.finish()
    }
}
