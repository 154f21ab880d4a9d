#![forbid(unsafe_code)]

use clap::Parser;
use websites::cli::{self, Cli};

fn main() {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();

    std::process::exit(cli::run(&args));
}
