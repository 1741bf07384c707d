//! tabsheet CLI - inspect and edit worksheet page layout in XLSX files

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tabsheet_core::{Margin, Workbook, Worksheet};
use tabsheet_xlsx::{XlsxReader, XlsxWriter};

#[derive(Parser)]
#[command(name = "tabsheet")]
#[command(author, version, about = "Worksheet page layout inspection and editing tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show rows, page breaks, margins and tab selection of every sheet
    Info {
        /// Input XLSX file
        input: PathBuf,
    },

    /// Set one page margin (in inches)
    SetMargin {
        /// Input XLSX file
        input: PathBuf,

        /// Sheet name or 0-based index
        sheet: String,

        /// Margin name: left, right, top, bottom, header or footer
        margin: Margin,

        /// New value in inches
        value: f64,

        /// Output file (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add or remove a manual page break
    #[command(group(ArgGroup::new("axis").required(true).args(["row", "col"])))]
    Break {
        /// Input XLSX file
        input: PathBuf,

        /// Sheet name or 0-based index
        sheet: String,

        /// Break after this 0-based row
        #[arg(long)]
        row: Option<u32>,

        /// Break after this 0-based column
        #[arg(long)]
        col: Option<u16>,

        /// Remove the break instead of adding it
        #[arg(long)]
        remove: bool,

        /// Output file (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::SetMargin {
            input,
            sheet,
            margin,
            value,
            output,
        } => set_margin(&input, &sheet, margin, value, output.as_deref()),
        Commands::Break {
            input,
            sheet,
            row,
            col,
            remove,
            output,
        } => edit_break(&input, &sheet, row, col, remove, output.as_deref()),
    }
}

fn open(input: &Path) -> Result<Workbook> {
    XlsxReader::read_file(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn save(workbook: &Workbook, input: &Path, output: Option<&Path>) -> Result<()> {
    let path = output.unwrap_or(input);
    XlsxWriter::write_file(workbook, path)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    eprintln!("Wrote '{}'", path.display());
    Ok(())
}

/// Find a sheet by exact name, falling back to a 0-based index
fn resolve_sheet<'a>(workbook: &'a mut Workbook, sheet: &str) -> Result<&'a mut Worksheet> {
    let index = match workbook.sheet_index(sheet) {
        Some(index) => index,
        None => match sheet.parse::<usize>() {
            Ok(index) if index < workbook.sheet_count() => index,
            _ => bail!("Sheet '{}' not found", sheet),
        },
    };
    workbook
        .worksheet_mut(index)
        .with_context(|| format!("Sheet index {} not found", index))
}

fn set_margin(
    input: &Path,
    sheet: &str,
    margin: Margin,
    value: f64,
    output: Option<&Path>,
) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        bail!("Margin must be a non-negative number of inches, got {}", value);
    }

    let mut workbook = open(input)?;
    let ws = resolve_sheet(&mut workbook, sheet)?;
    let previous = ws.margin(margin);
    ws.set_margin(margin, value);
    eprintln!(
        "{}: {} margin {} -> {}",
        ws.name(),
        margin,
        previous,
        value
    );

    save(&workbook, input, output)
}

fn edit_break(
    input: &Path,
    sheet: &str,
    row: Option<u32>,
    col: Option<u16>,
    remove: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut workbook = open(input)?;
    let ws = resolve_sheet(&mut workbook, sheet)?;

    match (row, col, remove) {
        (Some(row), _, false) => ws.set_row_break(row)?,
        (Some(row), _, true) => ws.remove_row_break(row),
        (None, Some(col), false) => ws.set_column_break(col)?,
        (None, Some(col), true) => ws.remove_column_break(col),
        (None, None, _) => bail!("Either --row or --col is required"),
    }

    eprintln!(
        "{}: row breaks {}, column breaks {}",
        ws.name(),
        format_list(ws.row_breaks()),
        format_list(ws.column_breaks())
    );

    save(&workbook, input, output)
}

fn show_info(input: &Path) -> Result<()> {
    let workbook = open(input)?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());
    println!("Active sheet: {}", workbook.active_sheet());

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());
        println!("    Tab selected: {}", sheet.is_tab_selected());

        match (sheet.first_row_num(), sheet.last_row_num()) {
            (Some(first), Some(last)) => println!(
                "    Rows: {} (first {}, last {})",
                sheet.physical_row_count(),
                first,
                last
            ),
            _ => println!("    Rows: none"),
        }

        println!("    Row breaks: {}", format_list(sheet.row_breaks()));
        println!("    Column breaks: {}", format_list(sheet.column_breaks()));

        let margins: Vec<String> = Margin::ALL
            .iter()
            .map(|&m| format!("{}={}", m, sheet.margin(m)))
            .collect();
        println!("    Margins: {}", margins.join(" "));
        println!(
            "    Default row height: {}pt, column width: {}",
            sheet.default_row_height_in_points(),
            sheet.default_column_width()
        );

        let header = sheet.header();
        let footer = sheet.footer();
        if !header.text().is_empty() {
            println!("    Header: {}", header.text());
        }
        if !footer.text().is_empty() {
            println!("    Footer: {}", footer.text());
        }
    }

    Ok(())
}

fn format_list<T: ToString>(values: Option<Vec<T>>) -> String {
    match values {
        Some(values) => values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        None => "none".to_string(),
    }
}
