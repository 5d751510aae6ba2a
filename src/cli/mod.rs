mod handlers;
pub mod parse;

pub use handlers::config;
pub use parse::Cli;

use crate::core::error::PlotError;

/// Run one invocation of the command line.
pub fn run(cli: &Cli) -> Result<(), PlotError> {
    handlers::plot(cli)
}
