use anyhow::Result;
/// Career Roadmap CLI
///
/// Provides the interactive TUI plus match, roadmap and careers commands.
use clap::{Parser, Subcommand};
use roadmap_cli::commands;
use roadmap_cli::screens::{DEFAULT_INTERESTS, DEFAULT_SKILLS};
use roadmap_cli::ui;
use roadmap_core::{Level, DEFAULT_TOP_K};
use std::io;

#[derive(Parser)]
#[command(name = "roadmap-cli")]
#[command(about = "AI Career Roadmap Generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive roadmap generator
    Tui {
        /// Path to the careers JSON catalog
        #[arg(short, long, env = "ROADMAP_CATALOG", default_value = "data/careers.json")]
        catalog: String,
        /// Comma-separated skills to prefill
        #[arg(short, long, default_value = DEFAULT_SKILLS)]
        skills: String,
        /// Comma-separated interests to prefill
        #[arg(short, long, default_value = DEFAULT_INTERESTS)]
        interests: String,
    },
    /// Print the top career matches for the given skills and interests
    Match {
        #[arg(short, long, env = "ROADMAP_CATALOG", default_value = "data/careers.json")]
        catalog: String,
        #[arg(short, long)]
        skills: String,
        #[arg(short, long)]
        interests: String,
        /// Number of matches to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        top: usize,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the roadmap for one career
    Roadmap {
        #[arg(short, long, env = "ROADMAP_CATALOG", default_value = "data/careers.json")]
        catalog: String,
        /// Career name (case-insensitive)
        #[arg(long)]
        career: String,
        /// Beginner, Intermediate or Advanced; detected from --skills when omitted
        #[arg(short, long)]
        level: Option<Level>,
        #[arg(short, long, default_value = "")]
        skills: String,
    },
    /// List the careers in the catalog
    Careers {
        #[arg(short, long, env = "ROADMAP_CATALOG", default_value = "data/careers.json")]
        catalog: String,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Tui {
            catalog,
            skills,
            interests,
        } => {
            ui::run_tui(&catalog, &skills, &interests)?;
        }
        Commands::Match {
            catalog,
            skills,
            interests,
            top,
            json,
        } => {
            commands::run_match(&mut io::stdout().lock(), &catalog, &skills, &interests, top, json)?;
        }
        Commands::Roadmap {
            catalog,
            career,
            level,
            skills,
        } => {
            commands::run_roadmap(&mut io::stdout().lock(), &catalog, &career, level, &skills)?;
        }
        Commands::Careers { catalog } => {
            commands::run_careers(&mut io::stdout().lock(), &catalog)?;
        }
    }

    Ok(())
}
