//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use rle_huffman::estimate::estimate::estimate_file;
use rle_huffman::tools::cli::{diagnostic, estopts_init, exit_code};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Log to stderr: stdout carries only the result.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }

    let options = estopts_init();

    let est = match estimate_file(&options.file) {
        Ok(est) => est,
        Err(e) => {
            error!("{}", diagnostic(&options.file, &e));
            exit(exit_code(&e));
        }
    };

    if options.show_stats {
        info!("{}", est.report);
    }
    if options.show_codes {
        est.log_codes();
    }

    println!("{}", est.report.total_bits);
}
