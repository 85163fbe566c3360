//! Build and describe a planet.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

use primer::planet::{Planet, PlanetError};

use super::ui::Output;
use super::Outcome;

/// Describe a planet given its three fields.
pub fn cmd_planet(name: &str, planet_type: &str, star: &str, output: &Output) -> Result<Outcome> {
    Ok(report(Planet::new(name, planet_type, star), output))
}

/// Describe a planet read from a JSON object.
pub fn cmd_planet_from_file(path: &Path, output: &Output) -> Result<Outcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read planet from {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    debug!(path = %path.display(), "building planet from file");
    Ok(report(Planet::from_value(&value), output))
}

fn report(result: Result<Planet, PlanetError>, output: &Output) -> Outcome {
    match result {
        Ok(planet) => {
            let text = format!("{}\n{}", planet.describe(), planet.orbit());
            let value = json!({
                "planet": planet,
                "description": planet.describe(),
                "orbit": planet.orbit(),
            });
            output.result(&text, &value);
            Outcome::Accepted
        }
        Err(e) => {
            output.rejection(&e.to_string());
            Outcome::Rejected
        }
    }
}
