mod document;

use anyhow::{Context, Result};
use clap::Parser;
use document::Diagram;
use routing_layout::{FlowDirection, RoutingLayout, Vec2};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Compute a level/lane layout for a production routing diagram
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Routing diagram to lay out, in RON
    input: PathBuf,

    /// Write the laid out diagram here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// "horizontal" or "vertical", overrides the diagram's own direction
    #[arg(short, long)]
    direction: Option<String>,

    /// Width of a grid cell
    #[arg(long, default_value_t = 300.0)]
    cell_width: f32,

    /// Height of a grid cell
    #[arg(long, default_value_t = 150.0)]
    cell_height: f32,

    /// Offset of the grid from the origin
    #[arg(long, default_value_t = 50.0)]
    margin: f32,

    /// Print the level and lane of each node instead of the diagram
    #[arg(long)]
    grid: bool,
}

impl Args {
    fn layout(&self, stored: FlowDirection) -> RoutingLayout {
        RoutingLayout {
            cell: Vec2::new(self.cell_width, self.cell_height),
            margin: self.margin,
            direction: self
                .direction
                .as_deref()
                .map(FlowDirection::from)
                .unwrap_or(stored),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the diagram
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let diagram = Diagram::load(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let layout = args.layout(diagram.direction);
    debug!("Layout configuration: {layout:?}");

    info!(
        "Laying out {} nodes and {} edges, flowing {}",
        diagram.nodes.len(),
        diagram.edges.len(),
        layout.direction
    );

    if args.grid {
        for (id, cell) in diagram.grid(&layout) {
            println!("{id}\t{}\t{}", cell.level, cell.lane);
        }
        return Ok(());
    }

    let diagram = diagram.arrange(&layout);
    match &args.output {
        Some(path) => diagram
            .save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?,
        None => println!("{}", diagram.to_ron()?),
    }

    Ok(())
}
