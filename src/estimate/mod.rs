//! The estimate module runs the whole pipeline and costs the result.
//!
//! The estimate is built in the following steps:
//! - Bit extraction: Expand the mask bytes into bits, least significant bit first.
//! - Run Length Encoding: Collapse the bits into the lengths of their runs.
//! - Frequency count: Count how often each run length occurs.
//! - Huffman coding: Build a prefix code over the run lengths.
//! - Sizing: Add up code length times frequency for every run length.
//!
//! Only the payload is costed. The code table and any framing are not counted.
//!

pub mod estimate;
