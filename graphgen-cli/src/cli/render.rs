//! Plain-text rendering of command results.

use std::fmt::Display;
use std::io::{self, Write};

use graphgen_core::{Distance, Graph, GraphMetrics};

use super::commands::{ExecutionSummary, Report};

/// Narrowest matrix cell before the one-space gutter is added.
const MIN_CELL_WIDTH: usize = 2;

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The resolved seed always comes first so a zero-seeded run can be
/// repeated with `--seed`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{Cli, Command, GraphArgs, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GraphArgs {
///         vertices: 2,
///         edge_probability: 1.0,
///         loop_probability: 0.0,
///         seed: 3,
///         weighted: false,
///         directed: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Seed: 3\n"));
/// assert!(text.ends_with("0: (1, 1)\n1: (0, 1)\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Seed: {}", summary.seed.get())?;
    match &summary.report {
        Report::Generated => write_graph(&mut writer, &summary.graph),
        Report::Distances { source, distances } => {
            writeln!(writer, "Distances from vertex {source}:")?;
            write_distances(&mut writer, distances)
        }
        Report::Analysis(metrics) => write_metrics(&mut writer, metrics),
    }
}

fn write_graph(writer: &mut impl Write, graph: &Graph) -> io::Result<()> {
    let rows: Vec<&[u32]> = (0..graph.vertex_count())
        .filter_map(|row| graph.matrix_row(row))
        .collect();
    write_matrix(writer, "Adjacency matrix", &rows)?;

    writeln!(writer, "Adjacency list:")?;
    for (vertex, edges) in graph.adjacency_list().iter().enumerate() {
        write!(writer, "{vertex}:")?;
        for edge in edges {
            write!(writer, " ({}, {})", edge.target(), edge.weight())?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn write_distances(writer: &mut impl Write, distances: &[Distance]) -> io::Result<()> {
    for (vertex, distance) in distances.iter().enumerate() {
        match distance.hops() {
            Some(hops) => writeln!(writer, "Vertex {vertex}: {hops}")?,
            None => writeln!(writer, "Vertex {vertex}: unreachable")?,
        }
    }
    Ok(())
}

fn write_metrics(writer: &mut impl Write, metrics: &GraphMetrics) -> io::Result<()> {
    let rows: Vec<&[Distance]> = metrics.distances().rows().collect();
    write_matrix(writer, "Distance matrix", &rows)?;

    writeln!(writer, "Eccentricities:")?;
    for (vertex, ecc) in metrics.eccentricities().iter().enumerate() {
        writeln!(writer, "Vertex {vertex}: {ecc}")?;
    }
    writeln!(writer, "Radius: {}", metrics.radius())?;
    writeln!(writer, "Diameter: {}", metrics.diameter())?;
    writeln!(writer, "Central vertices: {}", VertexSet(metrics.central()))?;
    writeln!(writer, "Peripheral vertices: {}", VertexSet(metrics.peripheral()))
}

/// Writes a titled square matrix with a column header, a `+---` rule and
/// `i |` row prefixes. Columns are as wide as the widest cell (at least
/// [`MIN_CELL_WIDTH`]) plus one space.
fn write_matrix<T: Display>(writer: &mut impl Write, title: &str, rows: &[&[T]]) -> io::Result<()> {
    let cell_width = rows
        .iter()
        .flat_map(|row| row.iter())
        .map(|cell| cell.to_string().chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH)
        + 1;
    let index_width = rows.len().saturating_sub(1).to_string().len();

    writeln!(writer, "{title}:")?;
    write!(writer, "{:index_width$}  ", "")?;
    for column in 0..rows.len() {
        write!(writer, "{column:>cell_width$}")?;
    }
    writeln!(writer)?;

    write!(writer, "{:index_width$} +", "")?;
    writeln!(writer, "{}", "-".repeat(cell_width * rows.len()))?;

    for (index, row) in rows.iter().enumerate() {
        write!(writer, "{index:>index_width$} |")?;
        for cell in *row {
            write!(writer, "{cell:>cell_width$}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Displays vertex indices as `{0, 1, 2}`.
struct VertexSet<'a>(&'a [usize]);

impl Display for VertexSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (position, vertex) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        f.write_str("}")
    }
}
