/// Walks a byte slice one bit at a time, LSB first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    source: &'a [u8],
    cursor: usize,
    bit_index: u8,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader over the bytes given.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return the next bit as a bool, or None when the data is exhausted.
    pub fn bool_bit(&mut self) -> Option<bool> {
        let byte = *self.source.get(self.cursor)?;
        let bit = byte & (1 << self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Number of bits not yet read.
    pub fn remaining(&self) -> usize {
        (self.source.len() - self.cursor.min(self.source.len())) * 8 - self.bit_index as usize
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn lsb_first_test() {
        let x = [0b10000001_u8, 0b00000010];
        let bits: Vec<bool> = BitReader::new(&x).collect();
        assert_eq!(
            bits,
            vec![
                true, false, false, false, false, false, false, true, false, true, false, false,
                false, false, false, false
            ]
        );
    }

    #[test]
    fn bool_bit_test() {
        let x = [0xAA_u8];
        let mut br = BitReader::new(&x);
        for i in 0..8 {
            assert_eq!(br.bool_bit(), Some(i % 2 == 1));
        }
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.remaining(), 0);
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn remaining_test() {
        let x = "Hello".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.len(), 40);
        for _ in 0..11 {
            br.bool_bit();
        }
        assert_eq!(br.remaining(), 29);
        assert_eq!(br.bool_bit(), Some(false)); // 'e' is 0x65, bit 3 is clear
    }
}
