//! generate-pdf – export an HTML slide deck to PDF.
//!
//! Usage:
//!   generate-pdf <presentation-name> [--dry-run] [--root DIR] [--config FILE]
//!
//! Reads `slides/<presentation-name>.html` for the slide order, collects the
//! fragments under `slides/<presentation-name>/`, and writes
//! `<presentation-name>.pdf` into the workspace root.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

use deckprint::browser::detect_render_engine;
use deckprint::config::{load_config, CONFIG_FILE_NAME};
use deckprint::error::GenerateError;
use deckprint::pipeline::{run, Outcome, Request, SLIDES_DIR};
use deckprint::render::ChromeRenderer;

#[derive(Parser)]
#[command(
    name = "generate-pdf",
    version,
    about = "Assemble an HTML slide deck into one document and export it to PDF"
)]
struct Cli {
    /// Presentation name: slides/<name>.html and slides/<name>/
    presentation: Option<String>,

    /// Resolve and assemble only; print a summary instead of writing a PDF
    #[arg(long)]
    dry_run: bool,

    /// Workspace root containing the slides/ directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Settings file (default: <root>/pdf-config.json)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            process::exit(1);
        }
    };

    let Some(name) = cli.presentation.clone() else {
        report(&GenerateError::Usage, &cli);
        process::exit(GenerateError::Usage.exit_code());
    };

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join(CONFIG_FILE_NAME));
    let config = load_config(&config_path);
    log::debug!("Resolved configuration:\n{}", config.to_json());
    let renderer = ChromeRenderer::new(config.chrome_path.clone().or_else(detect_render_engine));

    if cli.dry_run {
        println!("DRY RUN MODE - No PDF will be generated\n");
    }

    let request = Request {
        root: cli.root.clone(),
        name,
        dry_run: cli.dry_run,
        config,
    };

    match run(&request, &renderer) {
        Ok(Outcome::DryRun(summary)) => {
            println!("\n{summary}");
            println!("\nDry run complete! Run without --dry-run to generate the PDF.");
        }
        Ok(Outcome::Exported { report, slides }) => {
            let kb = (report.bytes + 512) / 1024;
            println!("\nPDF generated successfully!");
            println!("Location:     {}", report.output.display());
            println!("Total slides: {slides}");
            println!("File size:    {kb} KB");
        }
        Err(e) => {
            report(&e, &cli);
            process::exit(e.exit_code());
        }
    }
}

/// Print a fatal error with whatever guidance helps the operator fix it.
fn report(err: &GenerateError, cli: &Cli) {
    eprintln!("Error: {err}");
    match err {
        GenerateError::Usage => print_usage(),
        GenerateError::PresentationNotFound { expected, available } => {
            eprintln!();
            eprintln!("Expected: {}", expected.display());
            eprintln!("Expected directory structure:");
            eprintln!("  {SLIDES_DIR}/");
            eprintln!("    └── <presentation-name>/");
            eprintln!("        └── [topic folders with HTML files]");
            eprintln!();
            match available {
                Some(names) if names.is_empty() => {
                    eprintln!("Available presentations:");
                    eprintln!("  (no presentations found)");
                }
                Some(names) => {
                    eprintln!("Available presentations:");
                    for name in names {
                        eprintln!("  - {name}");
                    }
                }
                None => {
                    eprintln!(
                        "Warning: {SLIDES_DIR}/ directory not found under {}",
                        cli.root.display()
                    );
                    eprintln!("Pass --root or run from the workspace directory.");
                }
            }
        }
        GenerateError::MetadataNotFound { expected } => {
            eprintln!();
            eprintln!("Expected: {}", expected.display());
            eprintln!(
                "This file must declare the `categorySlides` object that defines the order of the slides."
            );
        }
        _ => {}
    }
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  generate-pdf <presentation-name> [--dry-run] [--root DIR] [--config FILE]");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --dry-run      Show what would be generated without creating the PDF");
    eprintln!("  --root DIR     Workspace root containing slides/ (default: .)");
    eprintln!("  --config FILE  Settings file (default: <root>/{CONFIG_FILE_NAME})");
    eprintln!("  --help         Print this message");
}
