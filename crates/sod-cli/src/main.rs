use std::error::Error;

use clap::{Parser, Subcommand};
use sod_cli::commands::{
    assortativity::{self, AssortativityArgs},
    local::{self, LocalArgs},
    measure::{self, MeasureArgs},
    null_model::{self, NullModelArgs},
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sod", about = "Simpliciality analysis for hypergraphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute simplicial fraction, edit and face edit simpliciality.
    Measure(MeasureArgs),
    /// Score every node's neighbourhood with one metric.
    Local(LocalArgs),
    /// Correlate local scores across co-occurring nodes.
    Assortativity(AssortativityArgs),
    /// Measure configuration-model realizations of the input.
    NullModel(NullModelArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sod=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Measure(args) => measure::run(&args),
        Command::Local(args) => local::run(&args),
        Command::Assortativity(args) => assortativity::run(&args),
        Command::NullModel(args) => null_model::run(&args),
    }
}
