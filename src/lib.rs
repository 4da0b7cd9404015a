//! Run length Huffman size estimator for binary masks.
//!
//! Version 0.1.0
//!
//! A mask is flattened into a bitstream, the bitstream is run length encoded, and a Huffman code is
//! built over the run lengths. The result is the number of bits the coded run lengths would take.
//! Nothing is actually encoded: the code table, framing and decoding are all out of scope.
//!
//! Basic usage is as follows:
//!
//! `$> rle_huffman mask.raw`
//!
//! This prints a single number, the estimated payload size in bits.
//!
pub mod bitstream;
pub mod estimate;
pub mod huffman_coding;
pub mod tools;
