//! Planet value object.
//!
//! A `Planet` is validated once at construction and never changes afterwards.
//! Two entry points exist:
//! - [`Planet::new`] for callers that already hold text
//! - [`Planet::from_value`] for loosely typed input (JSON files), where a
//!   field may turn out not to be text at all

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors raised while constructing a [`Planet`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlanetError {
    /// A field was missing or was not a string.
    #[error("name, planet type, and star must be strings")]
    Type,

    /// A field was empty or contained only whitespace.
    #[error("name, planet type, and star cannot be empty")]
    Value,
}

/// A celestial body orbiting a star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    name: String,
    planet_type: String,
    star: String,
}

impl Planet {
    /// Create a planet, rejecting blank fields.
    ///
    /// Fields are stored exactly as given; trimming is only used for the
    /// blank check.
    pub fn new(
        name: impl Into<String>,
        planet_type: impl Into<String>,
        star: impl Into<String>,
    ) -> Result<Self, PlanetError> {
        let name = name.into();
        let planet_type = planet_type.into();
        let star = star.into();

        if [&name, &planet_type, &star]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            debug!(planet = %name, %planet_type, %star, "rejecting planet with blank field");
            return Err(PlanetError::Value);
        }

        Ok(Self {
            name,
            planet_type,
            star,
        })
    }

    /// Create a planet from a JSON object with `name`, `planet_type` and `star` keys.
    ///
    /// Every field is type-checked before any field is checked for blankness,
    /// so `{"name": "", "star": 7, ...}` reports a type error.
    pub fn from_value(value: &Value) -> Result<Self, PlanetError> {
        let field = |key: &str| value.get(key).and_then(Value::as_str);

        match (field("name"), field("planet_type"), field("star")) {
            (Some(name), Some(planet_type), Some(star)) => Self::new(name, planet_type, star),
            _ => {
                debug!("rejecting planet with non-string field");
                Err(PlanetError::Type)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn planet_type(&self) -> &str {
        &self.planet_type
    }

    pub fn star(&self) -> &str {
        &self.star
    }

    /// Sentence describing what the planet orbits.
    pub fn orbit(&self) -> String {
        format!("{} is orbiting around {}...", self.name, self.star)
    }

    /// One-line description of all three fields. Same text as `Display`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Planet: {} | Type: {} | Star: {}",
            self.name, self.planet_type, self.star
        )
    }
}
