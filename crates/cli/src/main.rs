mod commands;
mod logging;
mod profile;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Named profile presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Preset {
    Io,
    Source,
}

/// GBLN interchange toolchain.
#[derive(Parser)]
#[command(name = "gbln", version, about = "GBLN interchange toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a .gbln or .gbln.xz file parses
    Validate {
        /// Path to the interchange file
        file: PathBuf,
    },

    /// Reformat an interchange file, keeping its types
    Fmt {
        /// Path to the interchange file
        file: PathBuf,
        /// Print without whitespace
        #[arg(long)]
        compact: bool,
        /// Spaces per nesting level (0-8)
        #[arg(long, default_value_t = 2)]
        indent: u32,
        /// Write to this path instead of stdout; compressed when it ends in .xz
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Convert a JSON document to an interchange file
    FromJson {
        /// Path to the JSON input
        json: PathBuf,
        /// Path of the interchange file to write
        out: PathBuf,
        /// Profile preset to start from
        #[arg(long, value_enum)]
        preset: Option<Preset>,
        /// TOML file overlaying profile fields on the preset
        #[arg(long)]
        profile_file: Option<PathBuf>,
    },

    /// Convert an interchange file to JSON
    ToJson {
        /// Path to the interchange file
        gbln: PathBuf,
        /// Path of the JSON file to write
        out: PathBuf,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Compare compact interchange and JSON sizes for a JSON document
    Compare {
        /// Path to the JSON input
        json: PathBuf,
    },

    /// Check that a JSON document survives encode, print, parse and decode
    Roundtrip {
        /// Path to the JSON input
        json: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let gbln = gbln::Gbln::new();

    match cli.command {
        Commands::Validate { file } => {
            commands::validate::cmd_validate(&gbln, &file, cli.output, cli.quiet);
        }
        Commands::Fmt {
            file,
            compact,
            indent,
            out,
        } => {
            commands::fmt::cmd_fmt(
                &gbln,
                &file,
                compact,
                indent,
                out.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::FromJson {
            json,
            out,
            preset,
            profile_file,
        } => {
            commands::convert::cmd_from_json(
                &gbln,
                &json,
                &out,
                preset,
                profile_file.as_deref(),
                cli.output,
                cli.quiet,
            );
        }
        Commands::ToJson { gbln: path, out, pretty } => {
            commands::convert::cmd_to_json(&gbln, &path, &out, pretty, cli.output, cli.quiet);
        }
        Commands::Compare { json } => {
            commands::compare::cmd_compare(&gbln, &json, cli.output, cli.quiet);
        }
        Commands::Roundtrip { json } => {
            commands::roundtrip::cmd_roundtrip(&gbln, &json, cli.output, cli.quiet);
        }
    }
}

/// Report an error message to stderr in the requested output format.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Report a library error, including its kind under `--output json`, and
/// exit with status 1.
pub(crate) fn fail(err: &gbln::Error, output: OutputFormat, quiet: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    if !quiet {
        match output {
            OutputFormat::Text => eprintln!("error: {}", err),
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "error": err.to_string(),
                    "kind": err.kind().to_string(),
                });
                eprintln!("{}", json);
            }
        }
    }
    std::process::exit(1);
}
