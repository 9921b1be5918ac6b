//! Terminal demo using crossterm.
//!
//! Run: cargo run -- snake hard 7
//!      cargo run -- trace quick-sort
//!      cargo run -- list

use std::error::Error;

use algoscope_demo::{Command, Keys, Terminal, app, cli};
use algoscope_trace::{Algorithm, Family, TraceConfig};
use rand::RngExt;

fn main() -> Result<(), Box<dyn Error>> {
    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let keys = Keys::default();

    match command {
        Command::List => {
            for alg in Algorithm::ALL {
                let family = match alg.family() {
                    Family::Sorting => "sorting",
                    Family::Searching => "searching",
                };
                println!("{:<22} {family:<10} {}", alg.id(), alg.name());
            }
            Ok(())
        }
        Command::Snake { difficulty, seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            let mut term = Terminal::enter()?;
            app::snake(&mut term, &keys, difficulty.config(), seed)
        }
        Command::Trace { algorithm, target } => {
            let mut config = TraceConfig::new(algorithm);
            if let Some(t) = target {
                config = config.with_target(t);
            }
            let mut term = Terminal::enter()?;
            app::trace(&mut term, &keys, &config, &mut rand::rng())
        }
    }
}
