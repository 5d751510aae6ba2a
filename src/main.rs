use clap::Parser;
use log::LevelFilter;

use simpleplot::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
        .init();

    if let Err(e) = cli::run(&cli) {
        eprintln!("simpleplot: {e}");
        std::process::exit(1);
    }
}
