use std::io;

use tracing::level_filters::LevelFilter;

use crate::cli::{Args, LogFormat};


/// `--quiet` wins over `--debug`.
pub fn level(args: &Args) -> LevelFilter {
    if args.quiet {
        LevelFilter::WARN
    } else if args.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}


pub fn init(args: &Args) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level(args))
        .with_writer(io::stderr);

    match args.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
