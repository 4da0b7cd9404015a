use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::huffman::build_tree;
use crate::huffman_coding::huffman_codes::{code_string, generate_codes, CodeTable};
use crate::tools::freq_count::{freqs, FreqTable};
use crate::tools::rle::rle_encode;

/// Summary of one pass over a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Input size in bytes
    pub bytes: usize,
    /// Input size in bits
    pub bits: usize,
    /// Number of runs found
    pub runs: usize,
    /// Number of distinct run lengths
    pub distinct: usize,
    /// Longest run found
    pub max_run: usize,
    /// Longest code assigned
    pub max_code: usize,
    /// Estimated payload size in bits
    pub total_bits: u64,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bytes ({} bits) -> {} runs, {} distinct, longest run {}, longest code {} -> {} bits",
            self.bytes,
            self.bits,
            self.runs,
            self.distinct,
            self.max_run,
            self.max_code,
            self.total_bits
        )
    }
}

/// Everything the pipeline produced for one mask.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub report: Report,
    pub freqs: FreqTable,
    pub codes: CodeTable,
}

impl Estimate {
    /// (run length, frequency, code) for every run length, shortest run first.
    pub fn code_listing(&self) -> Vec<(usize, usize, String)> {
        let mut listing = self
            .codes
            .iter()
            .map(|(run, code)| {
                (
                    *run,
                    self.freqs.get(run).copied().unwrap_or(0),
                    code_string(code),
                )
            })
            .collect::<Vec<_>>();
        listing.sort_unstable();
        listing
    }

    /// Log the code table at info level.
    pub fn log_codes(&self) {
        info!("---- Code table ({} entries) ----", self.codes.len());
        for (run, count, code) in self.code_listing() {
            info!("run {:>6} x {:>8}: {}", run, count, code);
        }
    }
}

/// Total bits needed to send every run with its code: sum of code length times frequency.
pub fn total_bits(codes: &CodeTable, freqs: &FreqTable) -> u64 {
    codes
        .iter()
        .map(|(run, code)| code.len() as u64 * freqs.get(run).copied().unwrap_or(0) as u64)
        .sum()
}

/// Estimate the entropy coded size of a mask. Empty input has no runs and is rejected as InvalidInput.
pub fn estimate(data: &[u8]) -> io::Result<Estimate> {
    let bits = data.len() * 8;
    let runs = rle_encode(BitReader::new(data));
    debug!("{} bits collapsed into {} runs", bits, runs.len());

    let freqs = freqs(&runs);
    if freqs.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "input is empty, there are no runs to estimate",
        ));
    }
    debug!("{} distinct run lengths", freqs.len());

    let root = build_tree(&freqs)?;
    let codes = generate_codes(&root);
    debug!("Huffman tree depth {}", root.depth());
    // The tree has served its purpose once the codes exist.
    drop(root);

    let report = Report {
        bytes: data.len(),
        bits,
        runs: runs.len(),
        distinct: freqs.len(),
        max_run: runs.iter().copied().max().unwrap_or(0),
        max_code: codes.values().map(|c| c.len()).max().unwrap_or(0),
        total_bits: total_bits(&codes, &freqs),
    };
    debug!("{}", report);

    Ok(Estimate {
        report,
        freqs,
        codes,
    })
}

/// Read the whole mask file into memory, then estimate it. File errors keep their own kind.
pub fn estimate_file<P: AsRef<Path>>(path: P) -> io::Result<Estimate> {
    let data = fs::read(path.as_ref())?;
    info!("Read {} bytes from {}", data.len(), path.as_ref().display());
    estimate(&data)
}
