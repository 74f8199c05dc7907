//! Road navigation CLI library.
//!
//! Terminal styling and output formatting shared by the `roadnav-cli`
//! subcommands.

pub mod output;
pub mod terminal;
