use crate::error::HuffError;

/// Number of distinct symbols the coder supports. Byte 255 is reserved.
pub const ALPHABET_SIZE: usize = 255;

/// Frequency counts for every codable symbol, indexed by byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FreqTable {
    /// An all-zero table. The decode side fills this from the header.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count for one symbol. Zero means absent; the reserved byte reads as absent.
    pub fn get(&self, symbol: u8) -> u64 {
        if (symbol as usize) < ALPHABET_SIZE {
            self.counts[symbol as usize]
        } else {
            0
        }
    }

    /// Store the count for one symbol. The reserved byte cannot hold a count.
    pub fn set(&mut self, symbol: u8, count: u64) -> Result<(), HuffError> {
        if (symbol as usize) >= ALPHABET_SIZE {
            return Err(HuffError::InvalidSymbol(symbol));
        }
        self.counts[symbol as usize] = count;
        Ok(())
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Iterate `(symbol, count)` over the non-zero entries in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FreqTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a frequency count of the input data, one slot per codable byte.
/// The reserved byte 255 fails the whole count.
pub fn count_freqs(data: &[u8]) -> Result<FreqTable, HuffError> {
    let mut freqs = FreqTable::new();
    for &el in data {
        if el as usize >= ALPHABET_SIZE {
            return Err(HuffError::InvalidSymbol(el));
        }
        freqs.counts[el as usize] += 1;
    }
    Ok(freqs)
}

#[test]
fn count_freqs_test() {
    let freqs = count_freqs("aaabbbbcc".as_bytes()).unwrap();
    assert_eq!(freqs.get(97), 3);
    assert_eq!(freqs.get(98), 4);
    assert_eq!(freqs.get(99), 2);
    assert_eq!(freqs.get(100), 0);
    assert_eq!(freqs.total(), 9);
    assert_eq!(freqs.distinct(), 3);
}

#[test]
fn count_freqs_empty_test() {
    let freqs = count_freqs(&[]).unwrap();
    assert_eq!(freqs.total(), 0);
    assert_eq!(freqs.distinct(), 0);
    assert!(freqs.present().next().is_none());
}

#[test]
fn count_freqs_rejects_reserved_byte_test() {
    let result = count_freqs(&[97, 255, 98]);
    assert!(matches!(result, Err(HuffError::InvalidSymbol(255))));
}

#[test]
fn present_is_ascending_test() {
    let freqs = count_freqs("cabacba".as_bytes()).unwrap();
    let pairs = freqs.present().collect::<Vec<(u8, u64)>>();
    assert_eq!(pairs, vec![(97, 3), (98, 2), (99, 2)]);
}
