mod logging;
mod terminal;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use lwc_css_core::{
    availability_at, classify, create_stylesheet, AvailabilityTracker, CreateOutcome, Settings,
};

use crate::terminal::{OpenPolicy, TerminalHost};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Lightning Web Component stylesheet helper.
#[derive(Parser)]
#[command(name = "lwc-css", version, about = "Lightning Web Component stylesheet helper")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Language Server Protocol server over stdio
    Lsp {
        /// Editor-switch debounce in milliseconds (default 75)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Show the LWC component folder and stylesheet path for a file or folder
    Classify {
        /// File or folder inside an lwc/<component> directory
        path: PathBuf,
    },

    /// Report whether a stylesheet can be added for a file or folder
    Check {
        /// File or folder inside an lwc/<component> directory
        path: PathBuf,
    },

    /// Create the component stylesheet if it is missing
    Create {
        /// File or folder inside an lwc/<component> directory (default: current directory)
        path: Option<PathBuf>,
        /// Open an existing stylesheet without asking
        #[arg(long, conflicts_with = "no_open")]
        open: bool,
        /// Never open an existing stylesheet
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Lsp { debounce_ms } => {
            let options = lwc_css_lsp::ServeOptions { debounce_ms };
            if let Err(e) = lwc_css_lsp::run(options) {
                eprintln!("LSP server error: {}", e);
                process::exit(1);
            }
        }
        Commands::Classify { path } => {
            cmd_classify(&path, cli.output, cli.quiet);
        }
        Commands::Check { path } => {
            cmd_check(&path, cli.output, cli.quiet);
        }
        Commands::Create {
            path,
            open,
            no_open,
        } => {
            let policy = if open {
                OpenPolicy::Always
            } else if no_open {
                OpenPolicy::Never
            } else {
                OpenPolicy::Ask
            };
            cmd_create(path.as_deref(), policy, cli.output, cli.quiet);
        }
    }
}

fn cmd_classify(path: &Path, output: OutputFormat, quiet: bool) {
    let Some(folder) = classify(path) else {
        report_error(
            &format!("not an LWC component folder: {}", path.display()),
            output,
            quiet,
        );
        process::exit(1);
    };

    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "name":       folder.name(),
                "folder":     folder.path().display().to_string(),
                "stylesheet": folder.stylesheet_path().display().to_string(),
            });
            println!("{}", pretty(&value));
        }
        OutputFormat::Text => {
            println!(
                "{}\t{}",
                folder.name(),
                folder.stylesheet_path().display()
            );
        }
    }
}

fn cmd_check(path: &Path, output: OutputFormat, quiet: bool) {
    let Some(available) = availability_at(path) else {
        report_error(
            &format!("could not determine stylesheet state for {}", path.display()),
            output,
            quiet,
        );
        process::exit(1);
    };

    match output {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path":      path.display().to_string(),
                "available": available,
            });
            println!("{}", pretty(&value));
        }
        OutputFormat::Text => println!("{}", available),
    }
}

fn cmd_create(path: Option<&Path>, policy: OpenPolicy, output: OutputFormat, quiet: bool) {
    let settings = Settings::default();
    let silent = quiet || output == OutputFormat::Json;
    let mut host = TerminalHost::new(policy, silent);
    let mut tracker = AvailabilityTracker::new(settings.context_key.clone());

    match create_stylesheet(&mut host, &mut tracker, path, &settings.placeholder) {
        Ok(outcome) => match output {
            OutputFormat::Json => {
                let value = serde_json::to_value(&outcome)
                    .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }));
                println!("{}", pretty(&value));
            }
            OutputFormat::Text => match outcome {
                CreateOutcome::Created(path) => println!("created {}", path.display()),
                CreateOutcome::AlreadyExists(path) => println!("exists {}", path.display()),
            },
        },
        Err(e) => {
            if !quiet {
                match output {
                    OutputFormat::Json => eprintln!("{}", pretty(&e.to_json_value())),
                    OutputFormat::Text => eprintln!("{}", e),
                }
            }
            process::exit(1);
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("serialization error: {}", e))
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
