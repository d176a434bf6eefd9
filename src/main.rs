use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use internmatch::client::HttpRecommendEndpoint;
use internmatch::config::Config;
use internmatch::form::{self, Submitter};
use internmatch::term::TermView;
use internmatch::view::{Field, FormView};

/// Terminal client for the internship recommendation service
#[derive(Parser)]
#[command(name = "internmatch")]
#[command(about = "Find internships matching a candidate profile", long_about = None)]
struct Cli {
    /// Recommendation service base URL (overrides ENDPOINT_URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Probe the service health route before starting
    #[arg(long)]
    check: bool,

    /// Comma-separated skills, e.g. "python, pandas"
    #[arg(long, default_value = "")]
    skills: String,

    /// Preferred sector
    #[arg(long, default_value = "")]
    sector: String,

    /// Preferred location
    #[arg(long, default_value = "")]
    location: String,

    /// Short bio used for description matching
    #[arg(long, default_value = "")]
    bio: String,

    /// Submit once and exit instead of starting the interactive loop
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let base_url = cli.endpoint.unwrap_or(config.endpoint_url);

    let endpoint = HttpRecommendEndpoint::new(base_url.clone());
    if cli.check {
        match endpoint.health().await {
            Ok(()) => println!("{} Service reachable at {}", "✓".green(), base_url),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    let mut view = TermView::new();
    view.set_input(Field::Skills, &cli.skills);
    view.set_input(Field::Sector, &cli.sector);
    view.set_input(Field::Location, &cli.location);
    view.set_input(Field::Bio, &cli.bio);

    let submitter = Submitter::new(endpoint);

    if cli.once {
        submitter.submit_profile(&mut view).await;
        return Ok(());
    }

    println!("Commands: edit, submit, clear, useful <n>, fields, quit");
    loop {
        let Some(line) = prompt("internmatch> ")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("edit" | "e") => edit_fields(&mut view)?,
            Some("submit" | "s") => submitter.submit_profile(&mut view).await,
            Some("clear" | "c") => {
                form::clear_form(&mut view);
                println!("Form cleared.");
            }
            Some("useful" | "u") => match parts.next().and_then(|n| n.parse().ok()) {
                Some(n) => match view.mark_useful(n) {
                    Some(label) => println!("{}", label),
                    None => println!("No such card."),
                },
                None => println!("Usage: useful <card number>"),
            },
            Some("fields" | "f") => view.print_fields(),
            Some("quit" | "q") => break,
            Some(other) => println!("Unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}

/// Prompts each field in turn; an empty entry keeps the current value
fn edit_fields(view: &mut TermView) -> Result<()> {
    for field in Field::ALL {
        let current = view.input(field);
        let Some(entered) = prompt(&format!("  {} [{}]: ", field.name(), current))? else {
            break;
        };
        if !entered.is_empty() {
            view.set_input(field, &entered);
        }
    }
    Ok(())
}

/// Reads one line; returns None at end of input
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
