//! unform CLI - document analysis and export tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unform::{export, Config, JsonFormat, ResultDocument, Unform};

#[derive(Parser)]
#[command(name = "unform")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Analyze documents and export the extracted data", long_about = None)]
struct Cli {
    /// Input document file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory for export files
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document and export the results
    Analyze {
        /// Input document file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory (current directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Analysis model
        #[arg(long, default_value = unform::DEFAULT_MODEL)]
        model: String,

        /// Write only the JSON export
        #[arg(long, conflicts_with = "xlsx_only")]
        json_only: bool,

        /// Write only the XLSX export
        #[arg(long, conflicts_with = "json_only")]
        xlsx_only: bool,

        /// Service endpoint (overrides the environment)
        #[arg(long, env = "AZURE_DI_ENDPOINT", hide_env_values = true)]
        endpoint: Option<String>,

        /// Service API key (overrides the environment)
        #[arg(long, env = "AZURE_DI_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Re-export a previously saved result JSON to XLSX
    Export {
        /// Result JSON file produced by `analyze`
        #[arg(value_name = "RESULT_JSON")]
        input: PathBuf,

        /// Output directory (current directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show credential configuration status
    Check,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            model,
            json_only,
            xlsx_only,
            endpoint,
            key,
        }) => cmd_analyze(
            &input,
            output.as_deref(),
            &model,
            json_only,
            xlsx_only,
            endpoint,
            key,
        ),
        Some(Commands::Export { input, output }) => cmd_export(&input, output.as_deref()),
        Some(Commands::Check) => cmd_check(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: analyze if input is provided
            if let Some(input) = cli.input {
                cmd_analyze(
                    &input,
                    cli.output.as_deref(),
                    unform::DEFAULT_MODEL,
                    false,
                    false,
                    None,
                    None,
                )
            } else {
                println!("{}", "Usage: unform <FILE> [OUTPUT]".yellow());
                println!("       unform --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    model: &str,
    json_only: bool,
    xlsx_only: bool,
    endpoint: Option<String>,
    key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(endpoint, key);
    if !config.is_configured() {
        let missing = config.missing_credentials().join(", ");
        return Err(format!("missing credentials: {missing} (see `unform check`)").into());
    }

    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Analyzing {} with {}...", input.display(), model));

    let doc = Unform::new()
        .with_config(config)
        .with_model(model)
        .analyze_file(input);

    match doc {
        Ok(doc) => {
            pb.finish_and_clear();
            print_summary(&doc);

            if !xlsx_only {
                let json = export::to_json(&doc, JsonFormat::Pretty)?;
                let path = output_dir.join(export::export_filename("json"));
                fs::write(&path, json)?;
                println!("{} {}", "Saved to".green(), path.display());
            }

            if !json_only {
                let (bytes, _sheets) = export::to_xlsx(&doc)?;
                let path = output_dir.join(export::export_filename("xlsx"));
                fs::write(&path, bytes)?;
                println!("{} {}", "Saved to".green(), path.display());
            }

            Ok(())
        }
        Err(e) => {
            pb.finish_and_clear();
            Err(e.into())
        }
    }
}

fn cmd_export(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let doc = export::from_json(&json)?;

    let output_dir = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let (bytes, sheets) = export::to_xlsx(&doc)?;
    let path = output_dir.join(export::export_filename("xlsx"));
    fs::write(&path, bytes)?;

    println!("{} {} ({} sheets)", "Saved to".green(), path.display(), sheets.len());
    Ok(())
}

fn cmd_check() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    println!("{}", "Credential Configuration".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if config.is_configured() {
        println!("{}: configured", "Status".bold());
        println!(
            "{}: {}",
            "Endpoint".bold(),
            config.endpoint().unwrap_or_default()
        );
        println!("{}: set (hidden)", "Key".bold());
    } else {
        println!("{}: {}", "Status".bold(), "not configured".red());
        for name in config.missing_credentials() {
            println!("  {} {}", "missing".red(), name);
        }
        println!();
        println!("Set the variables above in the environment or a .env file.");
    }

    Ok(())
}

fn cmd_version() {
    println!("unform {}", env!("CARGO_PKG_VERSION"));
}

fn print_summary(doc: &ResultDocument) {
    println!("{}", "Analysis Results".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), doc.page_count);
    println!("{}: {}", "Key-value pairs".bold(), doc.key_value_pairs.len());
    println!("{}: {}", "Tables".bold(), doc.tables.len());
    println!("{}: {}", "Text lines".bold(), doc.line_count());

    let summary = &doc.confidence_summary;
    if summary.is_empty() {
        println!("{}: no confidence data reported", "Confidence".bold());
    } else {
        println!(
            "{}: avg {:.3} (min {:.3}, max {:.3}, n={})",
            "Confidence".bold(),
            summary.average,
            summary.minimum,
            summary.maximum,
            summary.count
        );
    }
}

/// Merge command-line credential overrides with the environment.
fn resolve_config(endpoint: Option<String>, key: Option<String>) -> Config {
    if endpoint.is_none() && key.is_none() {
        return Config::from_env();
    }

    let env = Config::from_env();
    Config::new(
        endpoint
            .or_else(|| env.endpoint().map(String::from))
            .unwrap_or_default(),
        key.or_else(|| env.key().map(String::from))
            .unwrap_or_default(),
    )
}
