//! BitReader: reads a packed bitstream most significant bit first.
//!
//! The decode side works over the packed payload as one in-memory slice, so
//! the reader is a cursor over borrowed bytes rather than an I/O wrapper.

const BIT_MASK: u8 = 0xff;

/// Reads bits from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over the packed data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return the next bit, or None if there is no more data to read.
    pub fn bit(&mut self) -> Option<bool> {
        if self.cursor >= self.data.len() {
            return None;
        }
        let bit = (self.data[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit == 1)
    }

    /// Count of unread bits left in the stream.
    pub fn remaining(&self) -> u64 {
        ((self.data.len() - self.cursor) * 8 - self.bit_index) as u64
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b1000_0001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(true));
        for _ in 0..6 {
            assert_eq!(br.bit(), Some(false));
        }
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn crosses_byte_boundary_test() {
        let x = [0b0000_0001, 0b1000_0000];
        let mut br = BitReader::new(&x);
        for _ in 0..7 {
            assert_eq!(br.bit(), Some(false));
        }
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), Some(true));
        assert_eq!(br.bit(), Some(false));
    }

    #[test]
    fn remaining_test() {
        let x = [0xff, 0x00];
        let mut br = BitReader::new(&x);
        assert_eq!(br.remaining(), 16);
        br.bit();
        br.bit();
        br.bit();
        assert_eq!(br.remaining(), 13);
        for _ in 0..13 {
            br.bit();
        }
        assert_eq!(br.remaining(), 0);
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.remaining(), 0);
        assert_eq!(br.bit(), None);
    }
}
