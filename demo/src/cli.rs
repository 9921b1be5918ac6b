//! Command-line parsing.

use algoscope_trace::Algorithm;

use crate::error::DemoError;
use crate::snake::Difficulty;

pub const USAGE: &str = "\
usage: algoscope-demo snake [easy|normal|hard] [seed]
       algoscope-demo trace <algorithm> [target]
       algoscope-demo list";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Snake {
        difficulty: Difficulty,
        seed: Option<u64>,
    },
    Trace {
        algorithm: Algorithm,
        target: Option<i32>,
    },
    /// Print the algorithm catalogue.
    List,
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, DemoError> {
    s.parse().map_err(|_| DemoError::InvalidNumber(s.to_string()))
}

/// Parse the arguments after the program name.
pub fn parse<I, S>(args: I) -> Result<Command, DemoError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let args: Vec<&str> = args.iter().map(|s| s.as_ref()).collect();
    match args.as_slice() {
        [] => Ok(Command::Snake {
            difficulty: Difficulty::default(),
            seed: None,
        }),
        ["snake", rest @ ..] if rest.len() <= 2 => Ok(Command::Snake {
            difficulty: match rest.first() {
                Some(d) => d.parse()?,
                None => Difficulty::default(),
            },
            seed: rest.get(1).map(|s| number(s)).transpose()?,
        }),
        ["trace", id, rest @ ..] if rest.len() <= 1 => Ok(Command::Trace {
            algorithm: id.parse()?,
            target: rest.first().map(|s| number(s)).transpose()?,
        }),
        ["list"] => Ok(Command::List),
        _ => Err(DemoError::Usage),
    }
}
