use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use manual_scanner::config::{Config, OutputFormat};
use manual_scanner::logging::init_tracing;
use manual_scanner::report::ScanReport;
use manual_scanner::{Keywords, ScanError};

#[derive(Parser)]
#[command(author, version, about = "Manual lexical scanner")]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source file and print its tokens
    Scan {
        /// Source file to scan
        file: PathBuf,
        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Omit the symbol table
        #[arg(long)]
        no_symbols: bool,
        /// Omit the statistics section
        #[arg(long)]
        no_stats: bool,
        /// Do not echo diagnostics as they are found
        #[arg(short, long)]
        quiet: bool,
    },
    /// Manage scanner configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with defaults
    Init,
    /// Print the config file location
    Path,
}

fn read_source(path: &Path) -> Result<String, ScanError> {
    if !path.exists() {
        return Err(ScanError::FileNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| ScanError::io(path, e))
}

/// Exit code 1 when the scan produced diagnostics.
fn scan_file(
    file: &Path,
    format: Option<OutputFormat>,
    no_symbols: bool,
    no_stats: bool,
    quiet: bool,
) -> Result<ExitCode, ScanError> {
    let mut config = Config::load()?;
    if let Some(format) = format {
        config.format = format;
    }
    config.show_symbols &= !no_symbols;
    config.show_stats &= !no_stats;

    let source = read_source(file)?;
    tracing::debug!(file = %file.display(), chars = source.chars().count(), "scanning");

    let keywords = Keywords::new();
    let report = ScanReport::scan(&source, &keywords, config.scan_options(quiet));

    match config.format {
        OutputFormat::Text => print!("{}", report.render_text(&config)),
        OutputFormat::Json => {
            println!("{}", report.render_json()?);
        }
    }

    if !report.has_errors() {
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("\n--- Errors Found ---");
    if quiet {
        for diagnostic in &report.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }
    if !report.complete {
        eprintln!("Scan stopped early; the token stream is incomplete.");
    }
    Ok(ExitCode::from(1))
}

fn run_config(command: ConfigCommands) -> Result<ExitCode, ScanError> {
    let path = Config::get_config_path();
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            println!("{:#?}", config);
        }
        ConfigCommands::Init => {
            if path.exists() {
                println!("Config file already exists at: {}", path.display());
            } else {
                Config::default().save_to(&path)?;
                println!("Initialized new config file at: {}", path.display());
            }
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Scan {
            file,
            format,
            no_symbols,
            no_stats,
            quiet,
        } => scan_file(&file, format, no_symbols, no_stats, quiet),
        Commands::Config { command } => run_config(command),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(2)
        }
    }
}
