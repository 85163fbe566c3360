//! RPG character creation.
//!
//! - [`stats`] - ordered validation and sheet rendering
//! - [`bar`] - fixed-width dot bars
//! - [`input`] - turning typed text into validated values

pub mod bar;
pub mod input;
pub mod stats;

pub use bar::{render_bar, BAR_WIDTH, EMPTY_GLYPH, FILLED_GLYPH};
pub use input::{parse_stat, CharacterDraft, CharacterInput, Field, InputError};
pub use stats::{
    character_report, create_character, create_character_from_value, CharacterError,
    CharacterSheet, Stats,
};
