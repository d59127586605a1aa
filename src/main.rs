//! Reconstruction Simulation - entry point
//!
//! Loads an optional scenario file, then runs a line-oriented session:
//! each input line is parsed into a command and executed against the
//! simulation until `close`.

use clap::Parser;
use reconstruction_sim::command::{Command, CommandExecutor};
use reconstruction_sim::core::error::Result;
use reconstruction_sim::scenario::load_scenario;
use reconstruction_sim::simulation::Simulation;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reconstruction-sim")]
#[command(about = "Turn-based settlement reconstruction simulation")]
struct Args {
    /// TOML scenario file with the initial settlements, facility catalog,
    /// and plans
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reconstruction_sim=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut sim = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Simulation::new(),
    };

    sim.open();
    println!("The simulation has started");

    let mut executor = CommandExecutor::new();
    let stdin = io::stdin();

    while sim.is_running() {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like close
            print!("{}", sim.close());
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => match executor.execute(&mut sim, command) {
                Ok(Some(output)) => print!("{}", ensure_newline(output)),
                Ok(None) => {}
                Err(error) => println!("Error: {}", error),
            },
            Err(error) => println!("Error: {}", error),
        }
    }

    println!("Simulation closed successfully.");
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
