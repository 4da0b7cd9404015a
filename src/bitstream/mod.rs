//! The bitstream module turns the raw mask bytes into the bit sequence the rest of the estimator works on.
//!
//! Bits are taken least significant first within each byte, byte by byte. The whole input is held in
//! memory, so the reader works directly on a byte slice rather than on a `Read` source.
//!
pub mod bitreader;
