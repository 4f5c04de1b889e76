//! Code Mentor - a terminal client for the CodeMentor AI mock backend
//!
//! This is the binary entry point. All logic lives in the member crates.

use clap::Parser;
use color_eyre::eyre::Result;

use mentor_app::load_config;
use mentor_core::{resolve, Section, SectionRoute};

/// Code Mentor - AI code review, debugging, and mentoring in the terminal
#[derive(Parser, Debug)]
#[command(name = "cmentor")]
#[command(about = "AI code review, debugging, and mentoring in the terminal", long_about = None)]
struct Args {
    /// Open directly on a settings section (slug, e.g. "api-keys")
    #[arg(long, value_name = "SECTION")]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    mentor_core::logging::init()?;

    // Unknown slugs land on the profile section, mirroring the web
    // client's redirect behavior.
    let initial_section: Option<Section> = args.section.as_deref().map(|slug| {
        let route = resolve(slug);
        if let SectionRoute::Redirect(fallback) = route {
            tracing::warn!(slug, "unknown settings section, opening {}", fallback);
        }
        route.destination()
    });

    let config = load_config();
    mentor_tui::run(config, initial_section).await?;

    Ok(())
}
