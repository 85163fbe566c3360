//! Character validation and sheet rendering.
//!
//! Checks run in a fixed order and the first failure is reported, so a
//! character that breaks several rules always produces the same message:
//!
//! 1. name is a string
//! 2. name is not empty
//! 3. name is at most [`MAX_NAME_LEN`] characters
//! 4. name has no spaces
//! 5. every stat is an integer
//! 6. every stat is at least [`MIN_STAT`]
//! 7. no stat exceeds [`MAX_STAT`]
//! 8. stats add up to [`STAT_BUDGET`]

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use super::bar::render_bar;

/// Longest accepted name, counted in characters.
pub const MAX_NAME_LEN: usize = 10;
/// Lowest value any stat may take.
pub const MIN_STAT: i64 = 1;
/// Highest value any stat may take.
pub const MAX_STAT: i64 = 4;
/// Total points every new character starts with.
pub const STAT_BUDGET: i64 = 7;

/// Reasons a character is rejected. `Display` yields the user-facing message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CharacterError {
    #[error("The character name should be a string")]
    NameType,

    #[error("The character should have a name")]
    EmptyName,

    #[error("The character name is too long")]
    NameTooLong,

    #[error("The character name should not contain spaces")]
    NameHasSpace,

    #[error("All stats should be integers")]
    StatType,

    #[error("All stats should be no less than 1")]
    StatTooLow,

    #[error("All stats should be no more than 4")]
    StatTooHigh,

    #[error("The character should start with 7 points")]
    BudgetViolation,
}

/// Validated stat block. Each value lies in `MIN_STAT..=MAX_STAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    strength: u8,
    intelligence: u8,
    charisma: u8,
}

impl Stats {
    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn intelligence(&self) -> u8 {
        self.intelligence
    }

    pub fn charisma(&self) -> u8 {
        self.charisma
    }
}

/// A character that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSheet {
    name: String,
    #[serde(flatten)]
    stats: Stats,
}

impl CharacterSheet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

impl fmt::Display for CharacterSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "STR {}", render_bar(self.stats.strength))?;
        writeln!(f, "INT {}", render_bar(self.stats.intelligence))?;
        write!(f, "CHA {}", render_bar(self.stats.charisma))
    }
}

/// Run the name checks (2-4).
pub fn validate_name(name: &str) -> Result<(), CharacterError> {
    if name.is_empty() {
        return Err(CharacterError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CharacterError::NameTooLong);
    }
    if name.contains(' ') {
        return Err(CharacterError::NameHasSpace);
    }
    Ok(())
}

/// Run the stat checks (6-8).
pub fn validate_stats(
    strength: i64,
    intelligence: i64,
    charisma: i64,
) -> Result<Stats, CharacterError> {
    let values = [strength, intelligence, charisma];

    if values.iter().any(|&v| v < MIN_STAT) {
        return Err(CharacterError::StatTooLow);
    }
    if values.iter().any(|&v| v > MAX_STAT) {
        return Err(CharacterError::StatTooHigh);
    }
    if values.iter().sum::<i64>() != STAT_BUDGET {
        return Err(CharacterError::BudgetViolation);
    }

    // Range checked above, so the narrowing casts are lossless.
    Ok(Stats {
        strength: strength as u8,
        intelligence: intelligence as u8,
        charisma: charisma as u8,
    })
}

/// Validate a character and build its sheet.
pub fn create_character(
    name: &str,
    strength: i64,
    intelligence: i64,
    charisma: i64,
) -> Result<CharacterSheet, CharacterError> {
    let result = validate_name(name)
        .and_then(|()| validate_stats(strength, intelligence, charisma))
        .map(|stats| CharacterSheet {
            name: name.to_string(),
            stats,
        });

    if let Err(e) = &result {
        debug!(character = name, strength, intelligence, charisma, error = %e, "character rejected");
    }
    result
}

/// Validate a loosely typed JSON object with `name`, `strength`,
/// `intelligence` and `charisma` keys.
///
/// The type checks keep their place in the check order: a bad name type is
/// reported before anything else, a bad stat type only after the name passes.
pub fn create_character_from_value(value: &Value) -> Result<CharacterSheet, CharacterError> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or(CharacterError::NameType)?;
    validate_name(name)?;

    let stat = |key: &str| -> Result<i64, CharacterError> {
        let number = value
            .get(key)
            .filter(|v| v.is_i64() || v.is_u64())
            .ok_or(CharacterError::StatType)?;
        // Integers past i64::MAX are still integers; they fail the range check.
        Ok(number.as_i64().unwrap_or(i64::MAX))
    };
    let strength = stat("strength")?;
    let intelligence = stat("intelligence")?;
    let charisma = stat("charisma")?;

    create_character(name, strength, intelligence, charisma)
}

/// Render the sheet, or the first failing check's message.
pub fn character_report(name: &str, strength: i64, intelligence: i64, charisma: i64) -> String {
    match create_character(name, strength, intelligence, charisma) {
        Ok(sheet) => sheet.to_string(),
        Err(e) => e.to_string(),
    }
}
