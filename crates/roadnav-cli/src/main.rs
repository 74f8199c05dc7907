mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnav_cli::output::OutputFormat;
use roadnav_cli::terminal::ColorPalette;
use roadnav_lib::{sample_city, Navigator, DEFAULT_MAX_RESULTS};

use commands::CommandContext;

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network search and routing")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors (also honoured via NO_COLOR).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every named place in the road network.
    Places,
    /// Autocomplete place names from a case-insensitive prefix.
    Search {
        /// Typed prefix.
        prefix: String,
        /// Maximum number of suggestions.
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,
    },
    /// Look up a place by its exact, case-sensitive name.
    Locate {
        /// Display name.
        name: String,
    },
    /// Compute the shortest route between two place names.
    Route {
        /// Starting place name.
        #[arg(long = "from")]
        from: String,
        /// Destination place name.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let (adjacency, nodes) = sample_city();
    let ctx = CommandContext {
        navigator: Navigator::new(adjacency, nodes),
        format: cli.format,
        palette,
    };

    match cli.command {
        Command::Places => commands::places::handle_places(&ctx),
        Command::Search { prefix, limit } => commands::search::handle_search(&ctx, &prefix, limit),
        Command::Locate { name } => commands::places::handle_locate(&ctx, &name),
        Command::Route { from, to } => commands::route::handle_route(&ctx, &from, &to),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
