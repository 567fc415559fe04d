//! Small helpers shared across CLI tests.

use super::{CliError, ExecutionSummary, GraphArgs, render_summary};

/// Unweighted, undirected graph options with loops disabled.
pub(super) fn graph_args(vertices: usize, edge_probability: f64, seed: u32) -> GraphArgs {
    GraphArgs {
        vertices,
        edge_probability,
        loop_probability: 0.0,
        seed,
        weighted: false,
        directed: false,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_summary(summary, &mut buffer) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("rendered output is not UTF-8: {err}"),
    }
}

pub(super) fn expect_cli_error<T>(result: Result<T, CliError>, panic_msg: &str) -> CliError {
    match result {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
