//! dense-route - shortest routes from one vertex of a dense cost matrix.
//!
//! Reads a graph description, asks for (or takes) a source vertex, runs
//! Dijkstra and prints the cost and predecessor of every vertex.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use ordered_float::OrderedFloat;
use serde::Serialize;

use dense_route::graph::{DenseGraph, Graph};
use dense_route::io::{load_path, prompt_source, resolve_source, Report};
use dense_route::{Dijkstra, EdgeCost, InputMode, ReportFormat, RouteConfig, ShortestPathAlgorithm};

/// Numeric type used for edge costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CostKind {
    /// 64-bit signed integers
    Integer,
    /// 64-bit floating point numbers
    Float,
}

/// Shortest routes over a dense directed graph.
#[derive(Parser)]
#[command(name = "dense-route")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Graph description file: vertex count followed by the cost matrix (-1 = no edge)
    graph: PathBuf,

    /// Source vertex (prompted for when omitted; out of range falls back to 0)
    #[arg(short, long, allow_negative_numbers = true)]
    source: Option<i64>,

    /// JSON configuration file; command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Continue with missing edges when the description ends early
    #[arg(long)]
    lenient: bool,

    /// Largest vertex count accepted from the description
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Print the full route to every destination
    #[arg(short, long)]
    routes: bool,

    /// Edge cost type
    #[arg(long, value_enum, default_value_t = CostKind::Integer)]
    costs: CostKind,
}

impl Cli {
    fn route_config(&self) -> dense_route::Result<RouteConfig> {
        let mut config = match &self.config {
            Some(path) => RouteConfig::from_json_file(path)?,
            None => RouteConfig::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if self.lenient {
            config.input_mode = InputMode::Lenient;
        }
        if let Some(max_vertices) = self.max_vertices {
            config.max_vertices = max_vertices;
        }
        if self.routes {
            config.show_routes = true;
        }

        Ok(config)
    }
}

fn run<W>(cli: &Cli, config: &RouteConfig) -> dense_route::Result<String>
where
    W: EdgeCost + Serialize,
{
    let loaded = load_path::<W, _>(&cli.graph, &config.load_options())?;
    let graph = loaded.graph;
    let vertex_count = graph.vertex_count();

    let source = match cli.source {
        Some(requested) => resolve_source(Some(requested), vertex_count),
        None => prompt_source(io::stdin().lock(), io::stdout(), vertex_count)?,
    };

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;
    info!(
        "{} from {}: {} of {} vertices reachable",
        <Dijkstra as ShortestPathAlgorithm<W, DenseGraph<W>>>::name(&dijkstra),
        source,
        result.reachable_count(),
        vertex_count
    );

    Report::new(&result, config.show_routes).render(config.format, config.column_width)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = cli.route_config().and_then(|config| match cli.costs {
        CostKind::Integer => run::<i64>(&cli, &config),
        CostKind::Float => run::<OrderedFloat<f64>>(&cli, &config),
    });

    match outcome {
        Ok(rendered) => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
