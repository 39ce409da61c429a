//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use clap::Parser;
use log::info;
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::decompress;
use huffzip::error::HuffError;
use huffzip::tools::cli::{HzOpts, Mode};

fn main() -> Result<(), HuffError> {
    let options = HzOpts::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        options.log_level(),
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();
    info!("Operational mode set to {}", options.op_mode());

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode() {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    info!("Done.\n");
    result
}
