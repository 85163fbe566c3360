//! CLI entry point and command handlers for primer.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing::debug;

use cmd::character::CharacterArgs;
use cmd::ui::{Output, OutputMode};
use cmd::Outcome;
use primer::config::Config;

#[derive(Parser)]
#[command(name = "primer")]
#[command(version)]
#[command(about = "Planet descriptions and RPG character sheets", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    primer character           Interactive character creator\n    primer planet Earth Terrestrial Sun\n\n    Set RUST_LOG=primer=debug to see why input was rejected."
)]
struct Cli {
    /// Config file layered over ~/.config/primer/config.md and .primer/config.md
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Emit results as JSON lines
    #[arg(long, global = true, conflicts_with = "quiet")]
    json: bool,
    /// Print results and errors only
    #[arg(long, short, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an RPG character and print its stat sheet
    ///
    /// Values not given as flags are asked for on stdin, in the order
    /// name, strength, intelligence, charisma.
    Character {
        /// Character name (at most 10 characters, no spaces)
        #[arg(long)]
        name: Option<String>,
        /// Strength, 1-4
        #[arg(long, allow_hyphen_values = true)]
        strength: Option<String>,
        /// Intelligence, 1-4
        #[arg(long, allow_hyphen_values = true)]
        intelligence: Option<String>,
        /// Charisma, 1-4
        #[arg(long, allow_hyphen_values = true)]
        charisma: Option<String>,
        /// Read the character from a JSON object instead of prompting
        #[arg(
            long,
            value_name = "PATH",
            conflicts_with_all = ["name", "strength", "intelligence", "charisma"]
        )]
        from_file: Option<PathBuf>,
    },
    /// Describe a planet and the star it orbits
    Planet {
        /// Planet name
        #[arg(required_unless_present = "from_file")]
        name: Option<String>,
        /// Planet type, e.g. "Gas Giant"
        #[arg(required_unless_present = "from_file")]
        planet_type: Option<String>,
        /// Star the planet orbits
        #[arg(required_unless_present = "from_file")]
        star: Option<String>,
        /// Read the planet from a JSON object
        #[arg(long, value_name = "PATH", conflicts_with_all = ["name", "planet_type", "star"])]
        from_file: Option<PathBuf>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    primer::logging::init_tracing();

    let outcome = run()?;
    if outcome != Outcome::Accepted {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Character {
            name,
            strength,
            intelligence,
            charisma,
            from_file,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let output = build_output(&config, cli.json, cli.quiet);
            let args = CharacterArgs {
                name,
                strength,
                intelligence,
                charisma,
                from_file,
            };
            cmd::character::cmd_character(args, &config, &output)
        }
        Commands::Planet {
            name,
            planet_type,
            star,
            from_file,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let output = build_output(&config, cli.json, cli.quiet);
            match (from_file, name, planet_type, star) {
                (Some(path), _, _, _) => cmd::planet::cmd_planet_from_file(&path, &output),
                (None, Some(name), Some(planet_type), Some(star)) => {
                    cmd::planet::cmd_planet(&name, &planet_type, &star, &output)
                }
                _ => anyhow::bail!("planet needs NAME, PLANET_TYPE and STAR, or --from-file"),
            }
        }
    }
}

/// Pick the output mode. Flags beat `PRIMER_QUIET`, which beats the config file.
fn build_output(config: &Config, json: bool, quiet: bool) -> Output {
    let mode = if json {
        OutputMode::Json
    } else if quiet || primer::ui::is_quiet() {
        OutputMode::Quiet
    } else {
        OutputMode::from(config.output.format)
    };
    let color = primer::ui::color_allowed(config.output.color);
    debug!(?mode, color, "output configured");

    Output::new(mode, color)
}

fn cmd_completion(shell: Shell) -> Result<Outcome> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "primer", &mut io::stdout());
    Ok(Outcome::Accepted)
}

fn cmd_version(verbose: bool) -> Result<Outcome> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("primer {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(Outcome::Accepted)
}
