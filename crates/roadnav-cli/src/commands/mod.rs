// Handlers for the CLI subcommands. main.rs parses arguments and dispatches
// here with a shared `CommandContext`.

pub mod places;
pub mod route;
pub mod search;

use roadnav_lib::Navigator;
use roadnav_cli::output::OutputFormat;
use roadnav_cli::terminal::ColorPalette;

/// State every handler needs: the loaded network and how to print results.
pub struct CommandContext {
    pub navigator: Navigator,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}
