use clap::Parser;
use log::info;
use std::io::{Error, ErrorKind};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the -v level (0-5) to a verbosity. Anything above 5 is Trace.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            // Quiet drops noncritical messages only; fatal diagnostics still get through.
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstOpts {
    /// Name of the mask file to read
    pub file: String,
    /// Log the code table
    pub show_codes: bool,
    /// Log the pipeline summary
    pub show_stats: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl EstOpts {
    pub fn new() -> Self {
        Self {
            file: DEFAULT_FILE.to_string(),
            show_codes: false,
            show_stats: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for EstOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for EstOpts {
    /// The code table and stats are logged at info level, so asking for either raises verbosity to Info.
    fn from(args: Args) -> Self {
        let mut verbose = Verbosity::from_level(args.v);
        if args.codes || args.stats {
            verbose = verbose.max(Verbosity::Info);
        }
        Self {
            file: args.file,
            show_codes: args.codes,
            show_stats: args.stats,
            verbose,
        }
    }
}

/// Mask file read when none is named on the command line.
pub const DEFAULT_FILE: &str = "mask.raw";

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Estimate the Huffman coded size of a run length encoded binary mask",
    long_about = "
    The mask file is read as raw bytes and expanded into bits, least significant bit first.
    The bits are run length encoded and a Huffman code is built over the run lengths.
    The number printed is the count of bits the coded runs would occupy, excluding the
    code table itself."
)]
pub struct Args {
    /// Mask file to process
    #[clap(default_value = "mask.raw")]
    file: String,

    /// Log the code table assigned to each run length
    #[clap(short = 'c', long = "codes")]
    codes: bool,

    /// Log a summary of each pipeline stage
    #[clap(short = 's', long = "stats")]
    stats: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// Process exit status for a fatal error: 2 for input with nothing to estimate, 1 for anything else.
pub fn exit_code(e: &Error) -> i32 {
    match e.kind() {
        ErrorKind::InvalidInput => 2,
        _ => 1,
    }
}

/// The message reported to the user for a fatal error.
pub fn diagnostic(file: &str, e: &Error) -> String {
    match e.kind() {
        ErrorKind::InvalidInput => format!("Invalid input: {}", e),
        _ => format!("Bad file access: {}: {}", file, e),
    }
}

/// Put command line information from CLAP into our internal structure and set the log level.
pub fn estopts_init() -> EstOpts {
    let opts = EstOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    info!("---- Estimator Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    info!("Getting input from the file {}", opts.file);
    if opts.show_codes {
        info!("Reporting the code table")
    };
    if opts.show_stats {
        info!("Reporting pipeline statistics")
    };
    info!("---- Estimator Initialization End ----");
    opts
}
