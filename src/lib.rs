//! # Primer
//!
//! Two small, independent components and the CLI that drives them.
//!
//! ## Modules
//!
//! - [`planet`] - `Planet` value object validated at construction
//! - [`character`] - RPG character validation and dot-bar stat sheets
//! - [`config`] - Configuration loading and merging
//! - [`ui`] - Quiet-mode and colour switches
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Example
//!
//! ```
//! use primer::character::create_character;
//! use primer::planet::Planet;
//!
//! let sheet = create_character("Hero", 2, 2, 3).unwrap();
//! assert!(sheet.to_string().starts_with("Hero\nSTR ●●○"));
//!
//! let earth = Planet::new("Earth", "Terrestrial", "Sun").unwrap();
//! assert_eq!(earth.orbit(), "Earth is orbiting around Sun...");
//! ```

pub mod character;
pub mod config;
pub mod logging;
pub mod planet;
pub mod ui;
