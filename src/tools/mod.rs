//! The tools module provides the helper stages that feed the huffman estimator.
//!
//! The tools are:
//! - cli: Command line interface and verbosity handling.
//! - freq_count: Frequency count of run lengths.
//! - rle: Run-Length-Encoding of the mask bitstream.
//!
pub mod cli;
pub mod freq_count;
pub mod rle;
