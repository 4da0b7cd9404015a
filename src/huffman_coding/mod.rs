//! The huffman module builds the prefix code used to cost the run length stream.
//!
//! Each distinct run length becomes a leaf weighted by how often it occurs. The tree is built greedily by
//! merging the two lightest nodes until one remains, then walked to hand every leaf its code. No bits are
//! ever written with these codes: only their lengths matter to the estimate.
//!
//! Building the tree is inherently sequential and does not benefit from multithreading.
//!

pub mod huffman;
pub mod huffman_codes;
