use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use pathway_core::config::{EngineArgs, EngineConfig};
use pathway_core::core::types::Pathway;
use pathway_core::logging::init_logging;
use pathway_core::{PathwayEngine, ProgrammingExperience, UserProfile};
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing::warn;

/// Interactive onboarding: answer three questions, get a learning pathway.
#[derive(Debug, Parser)]
#[command(name = "pathway_engine", version)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Generate from a profile JSON file and print the pathway as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::from_args(&cli.engine);
    init_logging(&config);

    let engine = match &config.catalog_path {
        Some(path) => PathwayEngine::from_file_or_default(path),
        None => PathwayEngine::new(),
    };
    for id in engine.catalog().missing_referenced_ids() {
        warn!("Module '{}' is referenced by the generator but missing from the catalog", id);
    }

    if let Some(path) = cli.json {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        let profile: UserProfile = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid profile in {}", path.display()))?;
        let pathway = engine.generate(&profile);
        println!("{}", serde_json::to_string_pretty(&pathway)?);
        return Ok(());
    }

    run_interactive(&engine)
}

fn run_interactive(engine: &PathwayEngine) -> Result<()> {
    loop {
        print_header()?;
        let Some(discipline) = ask("Discipline (e.g. literature, history)")? else {
            break;
        };
        let Some(experience) = ask("Programming experience (none/beginner/intermediate/advanced)")?
        else {
            break;
        };
        let Some(interests) = ask("Research interests, comma separated")? else {
            break;
        };

        let interests: Vec<&str> = interests
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let experience: ProgrammingExperience = experience.parse()?;
        let profile = UserProfile::new(&discipline, experience, &interests);

        print_pathway(&engine.generate(&profile), engine);

        if ask("Press [Enter] for another profile, or type 'exit'")?.is_none() {
            break;
        }
    }
    Ok(())
}

/// Reads one answer. `None` means the user typed `exit` or closed stdin.
fn ask(question: &str) -> Result<Option<String>> {
    print!("{} > ", question.bold());
    stdout().flush()?;

    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    let answer = input.trim();
    if answer == "exit" {
        return Ok(None);
    }
    Ok(Some(answer.to_string()))
}

fn print_header() -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "DHPrimer Pathway Generator".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Answer the questions to build a pathway. Type 'exit' to quit.\n");
    Ok(())
}

fn print_pathway(pathway: &Pathway, engine: &PathwayEngine) {
    println!("\n{} {}", "Pathway".bold().green(), pathway.id);
    println!(
        "Recommended language: {}",
        pathway.recommended_language.to_string().yellow()
    );
    for (i, id) in pathway.modules.iter().enumerate() {
        match engine.catalog().get(id) {
            Some(record) => println!(
                "  {}. {} ({} h)",
                i + 1,
                record.title,
                record.estimated_hours
            ),
            None => println!("  {}. {} {}", i + 1, id, "(not in catalog)".dark_grey()),
        }
    }
    println!("Estimated total: {} hours\n", pathway.estimated_hours);
}
