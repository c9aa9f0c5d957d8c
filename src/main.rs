use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use rbstep::output::{OutputFormat, StepFormatter};

/// rbstep - translate recorded browser actions to Ruby Selenium steps and back
#[derive(Parser, Debug)]
#[command(name = "rbstep")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log pattern matching decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the XPath string literal for a raw value
    Escape {
        /// Raw XPath value
        #[arg(value_name = "XPATH")]
        xpath: String,
    },

    /// Translate recorded actions (JSON lines or a JSON array) into Ruby steps
    Translate {
        /// Input file (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Describe Ruby step lines as localization keys and values
    Describe {
        /// Input file (defaults to stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(input: Option<&Path>) -> rbstep::Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> rbstep::Result<()> {
    let formatter = StepFormatter::new(cli.format);

    match &cli.command {
        Commands::Escape { xpath } => {
            let literal = rbstep::escape(xpath);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&literal)?),
                OutputFormat::Text => println!("{}", literal),
            }
        }
        Commands::Translate { input } => {
            let text = read_input(input.as_deref())?;
            for line in rbstep::translate_actions(&text)? {
                println!("{}", formatter.format_line(&line)?);
            }
        }
        Commands::Describe { input } => {
            let text = read_input(input.as_deref())?;
            for parsed in rbstep::describe_lines(&text) {
                println!("{}", formatter.format_parsed(&parsed)?);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
