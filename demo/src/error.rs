use std::fmt;

use algoscope_trace::TraceError;

use crate::cli::USAGE;

/// Errors from parsing the demo's command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// Missing or unrecognised subcommand.
    Usage,
    UnknownDifficulty(String),
    /// An argument that should be an integer is not.
    InvalidNumber(String),
    Trace(TraceError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => f.write_str(USAGE),
            Self::UnknownDifficulty(s) => {
                write!(f, "unknown difficulty \u{201c}{s}\u{201d} (easy, normal, hard)")
            }
            Self::InvalidNumber(s) => write!(f, "\u{201c}{s}\u{201d} is not an integer"),
            Self::Trace(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TraceError> for DemoError {
    fn from(e: TraceError) -> Self {
        Self::Trace(e)
    }
}
