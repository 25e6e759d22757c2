//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target. Generation
//! also renders its progress to the same target while it runs.

mod generate;
mod list;
mod output;

pub use generate::{
    ConnectionOutcome, GenerateAllReport, GenerateReport, render_preview_document,
    render_progress, render_warning,
};
pub use list::{ConnectionInfo, ListReport};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
