use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use colorpath_cli::output::{describe_error, OutputFormat};
use colorpath_lib::NETWORK_PATH_ENV;

mod commands;

use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest path between two stations for a given train color"
)]
struct Cli {
    /// Path to the graph configuration json file.
    #[arg(
        short = 'j',
        long = "graph-json-path",
        visible_alias = "graph_json_path",
        env = NETWORK_PATH_ENV
    )]
    graph_json_path: Option<PathBuf>,

    /// Root node to start the shortest path calculation.
    #[arg(short = 'r', long)]
    root: String,

    /// Goal/target node of the shortest path calculation.
    #[arg(short = 'g', long)]
    goal: String,

    /// Color of the train to use for the shortest path calculation.
    #[arg(short = 'c', long)]
    color: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the full path, including stations the color cannot use.
    #[arg(long)]
    raw: bool,
}

impl Cli {
    fn route_args(self) -> RouteCommandArgs {
        RouteCommandArgs {
            graph_json_path: self.graph_json_path,
            root: self.root,
            goal: self.goal,
            color: self.color,
            format: self.format,
            show_raw: self.raw,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match handle_route_command(&cli.route_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", describe_error(&error));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
