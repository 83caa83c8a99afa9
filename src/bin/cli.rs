//! Symphony CLI
//!
//! Command-line interface for building XML-RPC calls and decoding responses.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use symphony::protocol::{build, parse_str, validate_method_name, ParsedResponse};
use symphony::{Result, Value};
use tracing_subscriber::{fmt, EnvFilter};

/// Symphony CLI
#[derive(Parser, Debug)]
#[command(name = "symphony-cli")]
#[command(about = "XML-RPC call builder and response decoder")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the request document for a call
    Encode {
        /// Method name, e.g. station.getStations
        method: String,

        /// Parameters as a JSON array
        #[arg(short, long, default_value = "[]")]
        params: String,
    },

    /// Decode a response document from a file
    Decode {
        /// Path to the response document
        file: PathBuf,

        /// Print the decoded response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a method name
    Validate {
        /// The method name to check
        method: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,symphony=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Encode { method, params } => {
            let params = parse_params(&params)?;
            let document = build(&method, &params)?;
            println!("{}", document);
        }
        Commands::Decode { file, json } => {
            let text = std::fs::read_to_string(&file)?;
            tracing::debug!("Decoding {} ({} bytes)", file.display(), text.len());
            let response = parse_str(&text)?;
            print_response(&response, json)?;
        }
        Commands::Validate { method } => {
            if validate_method_name(&method) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// A JSON array of parameters; a lone non-array value is one parameter
fn parse_params(json: &str) -> Result<Vec<Value>> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(match parsed {
        serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
        other => vec![Value::from(other)],
    })
}

fn print_response(response: &ParsedResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    match response {
        ParsedResponse::Fault(fault) => println!("fault: {}", fault.value),
        ParsedResponse::Success(values) => {
            for value in values {
                println!("{}", value);
            }
        }
    }
    Ok(())
}
