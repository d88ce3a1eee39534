//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateSummary, GenerationResult, WrittenResult};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::BufferOutput;
