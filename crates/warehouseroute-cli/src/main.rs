use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use warehouseroute_lib::{load_graph, plan_route, Graph, NodeId, RouteSummary};

/// Environment variable consulted when `--graph` is not given.
const GRAPH_PATH_ENV: &str = "WAREHOUSEROUTE_GRAPH";

#[derive(Parser, Debug)]
#[command(author, version, about = "Warehouse routing utilities")]
struct Cli {
    /// Path to the warehouse graph JSON file.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every location in the graph with its node id.
    Locations,
    /// Compute the cheapest route between two locations.
    Route {
        /// Label of the start location.
        #[arg(long = "from")]
        from: String,
        /// Label of the destination location.
        #[arg(long = "to")]
        to: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct LocationEntry {
    id: NodeId,
    label: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_cli_graph(cli.graph)?;

    match cli.command {
        Command::Locations => handle_locations(&graph, cli.format),
        Command::Route { from, to } => handle_route(&graph, cli.format, &from, &to),
    }
}

fn load_cli_graph(arg: Option<PathBuf>) -> Result<Graph> {
    let path = match arg.or_else(|| env::var_os(GRAPH_PATH_ENV).map(PathBuf::from)) {
        Some(path) => path,
        None => anyhow::bail!("no graph file given; pass --graph or set {}", GRAPH_PATH_ENV),
    };
    let graph = load_graph(&path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;
    Ok(graph)
}

fn handle_locations(graph: &Graph, format: OutputFormat) -> Result<()> {
    let mut entries: Vec<LocationEntry> = graph
        .nodes()
        .map(|node| LocationEntry {
            id: node.id,
            label: node.location.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.label.cmp(&b.label));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("{} ({})", entry.label, entry.id);
            }
        }
    }

    Ok(())
}

fn handle_route(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let route = plan_route(graph, from, to)?;
    let summary = RouteSummary::from_route(graph, &route)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print!("{}", summary.render_plain()),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
