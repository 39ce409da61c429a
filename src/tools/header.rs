use crate::error::HuffError;
use crate::tools::freq_count::{FreqTable, ALPHABET_SIZE};

/// Serialize the non-zero counts as one ASCII line: symbol and count pairs
/// in ascending symbol order, single spaces between values, closed by a
/// newline. "aaabbbbcc" becomes `97 3 98 4 99 2\n`. An empty table
/// serializes as the bare newline.
pub fn encode_header(freqs: &FreqTable) -> String {
    let mut header = String::new();
    for (symbol, count) in freqs.present() {
        header.push_str(&format!("{} {} ", symbol, count));
    }
    // Drop the separator after the last pair, the newline closes the line.
    if header.ends_with(' ') {
        header.pop();
    }
    header.push('\n');
    header
}

/// Parse a header line back into a frequency table. The line may arrive
/// with or without its closing newline. An odd number of values, a value
/// that is not a non-negative integer, a symbol beyond the alphabet, or
/// counts whose total overflows u64 all make the header malformed. A
/// repeated symbol keeps its last count.
pub fn decode_header(line: &str) -> Result<FreqTable, HuffError> {
    let values = line.split_whitespace().collect::<Vec<&str>>();
    if values.len() % 2 != 0 {
        return Err(HuffError::MalformedHeader(format!(
            "expected symbol and count pairs, found {} values",
            values.len()
        )));
    }

    let mut freqs = FreqTable::new();
    let mut total: u64 = 0;
    for pair in values.chunks(2) {
        let symbol = pair[0]
            .parse::<u64>()
            .map_err(|_| HuffError::MalformedHeader(format!("bad symbol `{}`", pair[0])))?;
        let count = pair[1]
            .parse::<u64>()
            .map_err(|_| HuffError::MalformedHeader(format!("bad count `{}`", pair[1])))?;
        if symbol >= ALPHABET_SIZE as u64 {
            return Err(HuffError::MalformedHeader(format!(
                "symbol {} is outside the supported range 0-254",
                symbol
            )));
        }
        // Keep a running total so later sums and merged weights stay inside
        // u64. A repeated symbol replaces its count, so back the old one out.
        total = (total - freqs.get(symbol as u8))
            .checked_add(count)
            .ok_or_else(|| HuffError::MalformedHeader("counts overflow".to_string()))?;
        freqs.set(symbol as u8, count)?;
    }
    Ok(freqs)
}

#[cfg(test)]
mod test {
    use super::{decode_header, encode_header};
    use crate::error::HuffError;
    use crate::tools::freq_count::{count_freqs, FreqTable};

    #[test]
    fn encode_header_test() {
        let freqs = count_freqs("aaabbbbcc".as_bytes()).unwrap();
        assert_eq!(encode_header(&freqs), "97 3 98 4 99 2\n");
    }

    #[test]
    fn encode_header_single_symbol_test() {
        let freqs = count_freqs(b"aaaa").unwrap();
        assert_eq!(encode_header(&freqs), "97 4\n");
    }

    #[test]
    fn encode_header_empty_test() {
        assert_eq!(encode_header(&FreqTable::new()), "\n");
    }

    #[test]
    fn header_round_trip_test() {
        let freqs = count_freqs("the quick brown fox".as_bytes()).unwrap();
        let decoded = decode_header(&encode_header(&freqs)).unwrap();
        assert_eq!(decoded, freqs);
    }

    #[test]
    fn decode_header_without_newline_test() {
        let freqs = decode_header("97 3 98 4 99 2").unwrap();
        assert_eq!(freqs.get(98), 4);
        assert_eq!(freqs.total(), 9);
    }

    #[test]
    fn decode_header_empty_line_test() {
        let freqs = decode_header("\n").unwrap();
        assert_eq!(freqs.total(), 0);
    }

    #[test]
    fn decode_header_malformed_test() {
        for line in ["97 3 98", "97 three", "-1 3", "300 3", "9x 3"] {
            let result = decode_header(line);
            assert!(
                matches!(result, Err(HuffError::MalformedHeader(_))),
                "`{}` should not parse",
                line
            );
        }
    }

    #[test]
    fn decode_header_last_duplicate_wins_test() {
        let freqs = decode_header("97 3 97 9\n").unwrap();
        assert_eq!(freqs.get(97), 9);
    }

    #[test]
    fn decode_header_count_overflow_test() {
        // Two counts of 2^63 wrap a u64 total.
        let result = decode_header("0 9223372036854775808 1 9223372036854775808");
        assert!(matches!(result, Err(HuffError::MalformedHeader(_))));
    }

    #[test]
    fn decode_header_replaced_count_does_not_overflow_test() {
        // The duplicate replaces the first huge count, so the total fits.
        let freqs = decode_header("97 9223372036854775808 97 4 98 2").unwrap();
        assert_eq!(freqs.get(97), 4);
        assert_eq!(freqs.total(), 6);
    }
}
