//! Run length encoding of a bitstream.
//!
//! The scan starts as if a 0 bit preceded the stream. A run of that virtual bit has length zero when the
//! stream starts with a 1, and zero length runs are never emitted. The run still open when the bits run
//! out is flushed, so every bit of the input is counted in exactly one run.

/// The run currently open during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Value of the bits in the open run
    pub current: bool,
    /// Length of the open run so far
    pub open: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            current: false,
            open: 0,
        }
    }

    /// Feed one bit. Returns the length of the run this bit closed, if any.
    pub fn push(&mut self, bit: bool) -> Option<usize> {
        // Same bit as the open run, so just extend it
        if bit == self.current {
            self.open += 1;
            return None;
        }
        // Otherwise close the open run and start a new one with this bit
        let closed = self.open;
        self.current = bit;
        self.open = 1;
        // The virtual leading 0 closes with length zero when the data starts with a 1. Skip it.
        (closed > 0).then_some(closed)
    }

    /// Close out the scan, returning the trailing run if there is one.
    pub fn finish(self) -> Option<usize> {
        (self.open > 0).then_some(self.open)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse a bit sequence into the lengths of its maximal runs of identical bits.
pub fn rle_encode<I>(bits: I) -> Vec<usize>
where
    I: IntoIterator<Item = bool>,
{
    // Start as if a 0 bit came before the data
    let mut state = RunState::new();
    // Collect every run a bit closes...
    let mut runs: Vec<usize> = bits.into_iter().filter_map(|bit| state.push(bit)).collect();
    // ...then flush the run that was still open when the bits ran out.
    runs.extend(state.finish());
    runs
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitreader::BitReader;

    #[test]
    fn all_zero_byte_test() {
        let runs = rle_encode(BitReader::new(&[0x00]));
        assert_eq!(runs, vec![8]);
    }

    #[test]
    fn alternating_byte_test() {
        // 0xAA starts with a 0 bit, so nothing is closed against the virtual leading 0
        let runs = rle_encode(BitReader::new(&[0xAA]));
        assert_eq!(runs, vec![1; 8]);
    }

    #[test]
    fn leading_one_test() {
        // 0x55 starts with a 1 bit; the empty run of the virtual 0 is not emitted
        let runs = rle_encode(BitReader::new(&[0x55]));
        assert_eq!(runs, vec![1; 8]);
        let runs = rle_encode(BitReader::new(&[0x0F]));
        assert_eq!(runs, vec![4, 4]);
    }

    #[test]
    fn trailing_run_flushed_test() {
        // 0xF0 then 0xFF: 4 zeros, then 12 ones that run to the end of the data
        let runs = rle_encode(BitReader::new(&[0xF0, 0xFF]));
        assert_eq!(runs, vec![4, 12]);
        assert_eq!(runs.iter().sum::<usize>(), 16);
    }

    #[test]
    fn runs_span_bytes_test() {
        let runs = rle_encode(BitReader::new(&[0x00, 0x00, 0x01]));
        assert_eq!(runs, vec![16, 1, 7]);
    }

    #[test]
    fn empty_test() {
        assert!(rle_encode(BitReader::new(&[])).is_empty());
    }

    #[test]
    fn state_test() {
        let mut state = RunState::new();
        assert_eq!(state.push(true), None);
        assert_eq!(state.push(true), None);
        assert_eq!(state.push(false), Some(2));
        assert_eq!(state, RunState { current: false, open: 1 });
        assert_eq!(state.finish(), Some(1));
        assert_eq!(RunState::default().finish(), None);
    }
}
