//! Command implementations and argument parsing for the `graphgen` CLI.

use clap::{Args, Parser, Subcommand};
use graphgen_core::{
    ClockSeedSource, DEFAULT_EDGE_PROBABILITY, DEFAULT_LOOP_PROBABILITY, Distance, Graph,
    GraphError, GraphGenerator, GraphMetrics, ResolvedSeed, bfs_distances,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    about = "Generate random graphs and report BFS distance metrics."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph and print its adjacency matrix and list.
    Generate(GraphArgs),
    /// Print BFS distances from one source vertex.
    Distances(DistancesCommand),
    /// Print the distance matrix, eccentricities, radius, diameter, and the
    /// central and peripheral vertices.
    Analyse(GraphArgs),
}

impl Command {
    const fn label(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::Distances(_) => "distances",
            Self::Analyse(_) => "analyse",
        }
    }
}

/// Parameters shared by every command describing the graph to generate.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of vertices.
    #[arg(short = 'n', long = "vertices", value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Probability of an edge between two distinct vertices.
    #[arg(long = "edge-probability", default_value_t = DEFAULT_EDGE_PROBABILITY)]
    pub edge_probability: f64,

    /// Probability of a self-loop on each vertex.
    #[arg(long = "loop-probability", default_value_t = DEFAULT_LOOP_PROBABILITY)]
    pub loop_probability: f64,

    /// Sampler seed; `0` picks a fresh seed for every run.
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Draw edge weights in `1..=10` instead of using 1.
    #[arg(short, long)]
    pub weighted: bool,

    /// Generate directed edges.
    #[arg(short, long)]
    pub directed: bool,
}

/// Options accepted by the `distances` command.
#[derive(Debug, Args, Clone)]
pub struct DistancesCommand {
    /// Graph to generate.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex the search starts from.
    #[arg(short, long)]
    pub source: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation or traversal failed in the core library.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns the underlying core error.
    #[must_use]
    pub const fn core(&self) -> &GraphError {
        match self {
            Self::Core(err) => err,
        }
    }
}

/// Command-specific part of an [`ExecutionSummary`].
#[derive(Debug, Clone)]
pub enum Report {
    /// The generated graph itself.
    Generated,
    /// BFS distances from `source`.
    Distances {
        /// Vertex the search started from.
        source: usize,
        /// Distance to each vertex, indexed by vertex.
        distances: Vec<Distance>,
    },
    /// Every distance-based metric of the graph.
    Analysis(GraphMetrics),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Seed the sampler actually ran with.
    pub seed: ResolvedSeed,
    /// Graph the command operated on.
    pub graph: Graph,
    /// Command-specific results.
    pub report: Report,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or traversal fails.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{Cli, Command, GraphArgs, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GraphArgs {
///         vertices: 4,
///         edge_probability: 1.0,
///         loop_probability: 0.0,
///         seed: 7,
///         weighted: false,
///         directed: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.seed.get(), 7);
/// assert_eq!(summary.graph.adjacency_entry_count(), 12);
/// # Ok::<(), graphgen_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    Span::current().record("command", field::display(cli.command.label()));
    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Distances(command) => run_distances(&command),
        Command::Analyse(args) => run_analyse(&args),
    }
}

#[instrument(name = "cli.generate", err, skip(args), fields(vertices = args.vertices))]
pub(super) fn run_generate(args: &GraphArgs) -> Result<ExecutionSummary, CliError> {
    let (seed, graph) = build_graph(args)?;
    info!(
        seed = seed.get(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(ExecutionSummary {
        seed,
        graph,
        report: Report::Generated,
    })
}

#[instrument(
    name = "cli.distances",
    err,
    skip(command),
    fields(vertices = command.graph.vertices, source = command.source, reachable = field::Empty),
)]
pub(super) fn run_distances(command: &DistancesCommand) -> Result<ExecutionSummary, CliError> {
    let (seed, graph) = build_graph(&command.graph)?;
    let distances = bfs_distances(&graph, command.source)?;
    let reachable = distances.iter().filter(|d| d.is_reachable()).count();
    Span::current().record("reachable", reachable);
    info!(seed = seed.get(), reachable, "distances computed");
    Ok(ExecutionSummary {
        seed,
        graph,
        report: Report::Distances {
            source: command.source,
            distances,
        },
    })
}

#[instrument(
    name = "cli.analyse",
    err,
    skip(args),
    fields(vertices = args.vertices, radius = field::Empty, diameter = field::Empty),
)]
pub(super) fn run_analyse(args: &GraphArgs) -> Result<ExecutionSummary, CliError> {
    let (seed, graph) = build_graph(args)?;
    let metrics = GraphMetrics::from_graph(&graph);
    let span = Span::current();
    span.record("radius", field::display(metrics.radius()));
    span.record("diameter", field::display(metrics.diameter()));
    info!(
        seed = seed.get(),
        central = metrics.central().len(),
        peripheral = metrics.peripheral().len(),
        "analysis completed"
    );
    Ok(ExecutionSummary {
        seed,
        graph,
        report: Report::Analysis(metrics),
    })
}

fn build_graph(args: &GraphArgs) -> Result<(ResolvedSeed, Graph), CliError> {
    let generator = GraphGenerator::builder()
        .with_vertex_count(args.vertices)
        .with_edge_probability(args.edge_probability)
        .with_loop_probability(args.loop_probability)
        .weighted(args.weighted)
        .directed(args.directed)
        .build()?;
    let seed = ResolvedSeed::resolve(args.seed, &mut ClockSeedSource);
    let graph = generator.generate(seed)?;
    Ok((seed, graph))
}
