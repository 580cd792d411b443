//! unpost CLI - rich-text editor document conversion tool
//!
//! A command-line tool for converting editor JSON documents to Markdown.

use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use unpost::render::{JsonFormat, RenderOptions};
use unpost::Document;

/// Rich-text editor JSON to Markdown, text, and JSON
#[derive(Parser)]
#[command(
    name = "unpost",
    author = "iyulab",
    version,
    about = "Convert rich-text editor documents to Markdown",
    long_about = "unpost - Rich-text editor document conversion tool.\n\n\
                  Converts editor JSON node trees to Markdown, plain text, or normalized JSON."
)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Markdown
    #[command(visible_alias = "md")]
    Markdown {
        /// Input file path ("-" for stdin)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum heading level (1-6)
        #[arg(long)]
        max_heading: Option<u8>,

        /// Unordered list marker
        #[arg(long, default_value = "*")]
        bullet: char,

        /// Trim surrounding whitespace
        #[arg(long)]
        trim: bool,
    },

    /// Convert a document to plain text
    Text {
        /// Input file path ("-" for stdin)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a document to JSON
    Json {
        /// Input file path ("-" for stdin)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure statistics
    Info {
        /// Input file path ("-" for stdin)
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Markdown {
            input,
            output,
            max_heading,
            bullet,
            trim,
        } => {
            let doc = read_document(&input)?;

            let mut options = RenderOptions::new().with_bullet_marker(bullet).with_trim(trim);
            if let Some(level) = max_heading {
                options = options.with_max_heading(level);
            }

            let markdown = unpost::render::to_markdown(&doc, &options);
            write_output(output.as_deref(), &markdown)?;
            report_written(output.as_deref(), "Markdown");
        }

        Commands::Text { input, output } => {
            let doc = read_document(&input)?;
            let text = unpost::render::to_text(&doc, &RenderOptions::default());
            write_output(output.as_deref(), &text)?;
            report_written(output.as_deref(), "text");
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let doc = read_document(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = unpost::render::to_json(&doc, format)?;
            write_output(output.as_deref(), &json)?;
            report_written(output.as_deref(), "JSON");
        }

        Commands::Info { input, json } => {
            let doc = read_document(&input)?;
            let stats = doc.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("{}", "Document Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Source".bold(), input.display());
            println!("{}: {}", "Type".bold(), doc.kind);
            println!("{}: {}", "Top-level nodes".bold(), doc.content.len());
            println!("{}: {}", "Headings".bold(), stats.headings);
            println!("{}: {}", "Paragraphs".bold(), stats.paragraphs);
            println!("{}: {}", "Lists".bold(), stats.lists);
            println!("{}: {}", "List items".bold(), stats.list_items);
            println!("{}: {}", "Images".bold(), stats.images);
            println!("{}: {}", "Links".bold(), stats.links);
            if stats.embeds > 0 {
                println!("{}: {}", "Embeds (skipped)".yellow(), stats.embeds);
            }
            if stats.unknown > 0 {
                println!("{}: {}", "Unknown nodes (skipped)".yellow(), stats.unknown);
            }

            let text = doc.plain_text();
            println!("\n{}", "Content Statistics".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Words".bold(), text.split_whitespace().count());
            println!("{}: {}", "Characters".bold(), text.chars().count());
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "unpost".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text editor document conversion to Markdown");
    println!();
    println!("Repository: https://github.com/iyulab/unpost");
}

fn read_document(input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    if input == Path::new("-") {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        return Ok(unpost::parse_bytes(&data)?);
    }
    Ok(unpost::parse_file(input)?)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", content)?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn report_written(path: Option<&Path>, label: &str) {
    if let Some(p) = path {
        eprintln!("{} Converted to {}: {}", "✓".green().bold(), label, p.display());
    }
}
