//! CLI command implementations.

pub mod search;
pub mod sizes;

pub use search::SearchCommand;
pub use sizes::SizesCommand;

/// Result of running a command: text for stdout plus an optional user notice.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub body: String,
    /// Shown on stderr when the search could not be completed
    pub notice: Option<String>,
}
