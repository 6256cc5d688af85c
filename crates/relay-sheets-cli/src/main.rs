//! Relay Sheets CLI - spreadsheet text extraction and snapshot copies

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relay_sheets::codec::SourceBook;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay")]
#[command(author, version, about = "Spreadsheet text extraction and snapshot tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text contents of a workbook
    Text {
        /// Input spreadsheet file (xls, xlsx)
        input: PathBuf,

        /// Sheet index to extract (0-based, default: all sheets)
        #[arg(short, long)]
        sheet: Option<usize>,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file
        input: PathBuf,
    },

    /// Print the header row of a sheet
    Titles {
        /// Input spreadsheet file
        input: PathBuf,

        /// Sheet index (0-based, default: 0)
        #[arg(short, long, default_value = "0")]
        sheet: usize,
    },

    /// Copy a workbook, flattening formulas to their evaluated text
    Snapshot {
        /// Source spreadsheet file
        src: PathBuf,

        /// Destination file
        dest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Text { input, sheet } => text(&input, sheet),
        Commands::Sheets { input } => sheets(&input),
        Commands::Titles { input, sheet } => titles(&input, sheet),
        Commands::Snapshot { src, dest } => snapshot(&src, &dest),
    }
}

fn text(input: &PathBuf, sheet: Option<usize>) -> Result<()> {
    let text = relay_sheets::read_excel(input, sheet)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    println!("{text}");
    Ok(())
}

fn sheets(input: &PathBuf) -> Result<()> {
    let book = SourceBook::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    for (i, name) in book.sheet_names().iter().enumerate() {
        println!("{i}: {name}");
    }
    Ok(())
}

fn titles(input: &PathBuf, sheet: usize) -> Result<()> {
    let titles = relay_sheets::read_titles(input, sheet)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    for title in titles {
        println!("{title}");
    }
    Ok(())
}

fn snapshot(src: &PathBuf, dest: &PathBuf) -> Result<()> {
    relay_sheets::snapshot(src, dest).with_context(|| {
        format!(
            "Failed to snapshot '{}' to '{}'",
            src.display(),
            dest.display()
        )
    })?;
    eprintln!("Wrote '{}'", dest.display());
    Ok(())
}
