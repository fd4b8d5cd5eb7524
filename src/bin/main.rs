use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use converse_core::{ConverseEngine, ConverseError, Direction, TranslationInput};
use crossterm::style::Stylize;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "converse", version, about = "Translate text with a phrase/word/character dictionary")]
struct Cli {
    /// Log level (0=info, 1=debug, 2=trace). Default: RUST_LOG, else warn
    #[arg(long = "log-level", visible_alias = "ll", value_parser = clap::value_parser!(u8).range(0..=2))]
    log_level: Option<u8>,
    /// Log file; logs go to stderr when omitted
    #[arg(long = "log-file", visible_alias = "lf")]
    log_file: Option<PathBuf>,
    /// Converse file (.json). Default: bundled sample data
    #[arg(short = 'c', long)]
    converse_file: Option<PathBuf>,
    /// Read from input file (.txt) instead of args
    #[arg(short = 'i', long, conflicts_with = "text")]
    input_file: Option<PathBuf>,
    /// Write to output file (.txt) instead of STDOUT
    #[arg(short = 'o', long)]
    output_file: Option<PathBuf>,
    /// Translate direction (ab or ba)
    #[arg(short = 'd', long, default_value = "ab")]
    direction: Direction,
    /// Translate stdin line by line until 'exit'
    #[arg(long, conflicts_with_all = ["input_file", "output_file", "text"])]
    interactive: bool,
    /// Text to translate
    text: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.interactive && cli.text.is_empty() && cli.input_file.is_none() {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "no input method provided")
            .exit();
    }

    if let Err(e) = init_logging(cli.log_level, cli.log_file.as_deref()) {
        eprintln!("[ERROR] Could not open log file: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "converse failed");
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_level: Option<u8>, log_file: Option<&Path>) -> io::Result<()> {
    let filter = match log_level {
        Some(0) => EnvFilter::new("info"),
        Some(1) => EnvFilter::new("debug"),
        Some(_) => EnvFilter::new("trace"),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    match log_file {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), ConverseError> {
    let engine = match &cli.converse_file {
        Some(path) => ConverseEngine::from_file(path, cli.direction)?,
        None => ConverseEngine::sample(cli.direction)?,
    };
    info!(
        source = %engine.source().map_or("<sample>".into(), |p| p.display().to_string()),
        direction = %cli.direction,
        "dictionary loaded"
    );

    if cli.interactive {
        return Ok(run_interactive(&engine)?);
    }

    let input = TranslationInput {
        text: (!cli.text.is_empty()).then(|| cli.text.join(" ")),
        file: cli.input_file,
    };
    let result = engine.translate_file(input, cli.output_file.as_deref())?;

    if cli.output_file.is_none() {
        if result.ends_with('\n') {
            print!("{}", result);
        } else {
            println!("{}", result);
        }
    }
    Ok(())
}

fn run_interactive(engine: &ConverseEngine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let direction = engine.translator().direction();
    println!("{}", format!("Conversable ({}). Type 'exit' to quit.", direction).bold());
    println!("---------------------------------------------------------------");

    loop {
        print!("{} ", ">".dark_grey());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text == "exit" {
            break;
        }
        println!("{}", engine.translate(text).green());
    }
    Ok(())
}
