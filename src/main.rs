//! levython-highlight - colorize Levython snippets from the command line

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use levython_highlight::{Config, Highlighter, HtmlPage, Result};

#[derive(Parser)]
#[command(version, about = "Syntax highlighter for Levython documentation snippets", long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Path to config file (defaults to ~/.levython-highlight.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Turn highlighting off for this run
    #[arg(long)]
    disable: bool,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Snippet as HTML span markup
    Html,
    /// Snippet with terminal colors
    Ansi,
    /// Whole HTML page, highlighting every <pre><code> block
    Page,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.disable {
        config.enabled = false;
    }

    let highlighter = Highlighter::with_config(&config)?;
    let input = read_input(cli.input.as_deref())?;

    let output = match cli.format {
        Format::Html => highlighter.to_html(&input),
        Format::Ansi => highlighter.to_ansi(&input),
        Format::Page => {
            let mut page = HtmlPage::parse(&input)?;
            let report = page.highlight(&highlighter);
            if report.failed > 0 {
                tracing::warn!("{} code block(s) left unhighlighted", report.failed);
            }
            page.to_html()
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
