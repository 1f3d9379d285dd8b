//! fixturegen - writes the XLSX import fixtures

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use xlsxfixture::{FixtureCase, FixtureSet, GeneratorBuilder};

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(
    author,
    version,
    about = "Generate XLSX fixtures for store/barcode import tests"
)]
struct Cli {
    /// Which fixtures to generate
    #[arg(short, long, value_enum, default_value_t = SetArg::All)]
    set: SetArg,

    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the selected fixtures instead of writing them
    #[arg(short, long)]
    list: bool,

    /// With --list, print the fixtures as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SetArg {
    All,
    EdgeCases,
    Example,
}

impl From<SetArg> for FixtureSet {
    fn from(arg: SetArg) -> Self {
        match arg {
            SetArg::All => FixtureSet::All,
            SetArg::EdgeCases => FixtureSet::EdgeCases,
            SetArg::Example => FixtureSet::Example,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let cases = FixtureSet::from(cli.set).cases()?;

    if cli.list {
        return list_cases(&cases, cli.json);
    }

    let mut builder = GeneratorBuilder::new();
    if let Some(dir) = &cli.output_dir {
        builder = builder.with_output_dir(dir);
    }
    let generator = builder.build()?;
    generator.validate_batch(&cases)?;

    let total = cases.len();
    for (i, case) in cases.iter().enumerate() {
        println!(
            "Creating fixture {}/{}: {}...",
            i + 1,
            total,
            case.description()
        );

        let path = generator
            .generate(case)
            .with_context(|| format!("Failed to create '{}'", case.file_name()))?;

        println!(
            "✓ {} created ({} data rows)",
            path.display(),
            case.data_row_count()
        );
        if let Some(header) = case.header() {
            println!("  - Columns: {}", header.join(", "));
        }
    }

    println!("\nAll {} fixture files created successfully!", total);
    Ok(())
}

fn list_cases(cases: &[FixtureCase], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(cases).context("Failed to serialize fixtures")?;
        println!("{}", out);
        return Ok(());
    }

    for case in cases {
        println!(
            "{}\t{}\t{} rows\t{}",
            case.file_name(),
            case.sheet_name(),
            case.rows().len(),
            case.description()
        );
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
