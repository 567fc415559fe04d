//! Command-line interface for generating graphs and reporting their BFS
//! metrics.
//!
//! Each command generates one graph from the shared graph options, runs its
//! computation, and returns an [`ExecutionSummary`] that [`render_summary`]
//! turns into text.

mod commands;
mod render;

pub use commands::{
    Cli, CliError, Command, DistancesCommand, ExecutionSummary, GraphArgs, Report, run_cli,
};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
