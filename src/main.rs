//! tag-autocomplete CLI

use clap::Parser;
use serde::Serialize;
use std::io::{self, Read};
use std::path::PathBuf;
use tag_autocomplete::{
    decorator, AutocompleteEngine, DecoratedRange, SeedConfig, Selection, SuggestionView,
    TextBuffer,
};

#[derive(Parser)]
#[command(name = "tag-autocomplete")]
#[command(about = "Trigger-based inline autocomplete for block-structured text editors")]
#[command(version)]
struct Cli {
    /// Text file to analyze (use - for stdin)
    file: PathBuf,

    /// Cursor line (1-based)
    line: u32,

    /// Cursor column (1-based)
    column: u32,

    /// Path to a seed config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Verbose output (show match info)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(format!("Unknown format: {}. Use 'json' or 'plain'", s)),
        }
    }
}

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    view: SuggestionView,
    decorations: Vec<DecoratedRange>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Read source
    let source = if cli.file.to_string_lossy() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cli.file)?
    };

    let config = match &cli.config {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::default(),
    };

    let buffer = TextBuffer::from_text(&source);
    if cli.line == 0 {
        return Err("line numbers are 1-based".into());
    }
    let block = buffer
        .blocks()
        .get(cli.line as usize - 1)
        .ok_or_else(|| format!("line {} out of range", cli.line))?;

    let caret = column_to_offset(block.text(), cli.column);
    let selection = Selection::caret(block.key(), caret);

    let mut engine = AutocompleteEngine::from_config(config);
    engine.on_change(&buffer, &selection, 0);

    if cli.verbose {
        eprintln!("Analyzing {}:{}:{}", cli.file.display(), cli.line, cli.column);
        eprintln!(
            "Match: {:?}",
            tag_autocomplete::matcher::match_at_caret(block.text(), caret)
        );
    }

    let output = Output {
        view: engine.suggestions(),
        decorations: decorator::entities(block.text()),
    };

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)?;
            println!("{}", json);
        }
        OutputFormat::Plain => {
            for (i, suggestion) in output.view.suggestions.iter().enumerate() {
                let marker = if i == output.view.highlighted { ">" } else { " " };
                println!("{} {}", marker, suggestion);
            }
            for range in &output.decorations {
                println!("entity {}..{} {}", range.start, range.end, range.text);
            }
            if cli.verbose {
                eprintln!("\n{} suggestions", output.view.suggestions.len());
            }
        }
    }

    Ok(())
}

/// Convert a 1-based character column to a byte offset, clamped to the
/// end of the line
fn column_to_offset(line: &str, column: u32) -> usize {
    let target = column.saturating_sub(1) as usize;
    line.char_indices()
        .nth(target)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
