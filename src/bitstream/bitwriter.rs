use crate::huffman_coding::code::Code;

/// Packs bits into bytes for output, most significant bit first.
pub struct BitWriter {
    pub output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Running count of data bits pushed, pad bits excluded.
    bits_written: u64,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of the size specified.
    /// Call flush() or finish() to pad and drain the bit queue before
    /// reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bits_written: 0,
        }
    }

    /// Internal bitstream write function, drains full bytes from the queue.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Put a single bit on the stream.
    pub fn push_bit(&mut self, bit: bool) {
        self.queue <<= 1; //shift queue by one bit
        self.queue |= bit as u64; //add the bit to the queue
        self.q_bits += 1; //update depth of queue bits
        self.bits_written += 1;
        self.write_stream();
    }

    /// Put a whole code on the stream, first (root) step first.
    pub fn push_code(&mut self, code: Code) {
        for i in 0..code.len() {
            self.push_bit(code.bit(i));
        }
    }

    /// Count of data bits pushed so far.
    pub fn bit_count(&self) -> u64 {
        self.bits_written
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits = 8;
            self.write_stream();
        }
    }

    /// Pad, drain and hand back the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;
    use crate::huffman_coding::code::Code;

    #[test]
    fn push_bit_test() {
        let mut bw = BitWriter::new(8);
        for bit in [true, false, false, false, false, false, false, true] {
            bw.push_bit(bit);
        }
        assert_eq!(bw.output, vec![0b1000_0001]);
        assert_eq!(bw.bit_count(), 8);
    }

    #[test]
    fn flush_pads_low_bits_test() {
        let mut bw = BitWriter::new(8);
        bw.push_bit(true);
        bw.push_bit(true);
        bw.push_bit(true);
        bw.flush();
        assert_eq!(bw.output, vec![0b1110_0000]);
        assert_eq!(bw.bit_count(), 3);
    }

    #[test]
    fn push_code_test() {
        let mut code = Code::new();
        code.push(true);
        code.push(false);
        code.push(true);

        let mut bw = BitWriter::new(8);
        bw.push_code(code);
        bw.push_code(code);
        bw.push_code(code);
        assert_eq!(bw.finish(), vec![0b1011_0110, 0b1000_0000]);
    }

    #[test]
    fn empty_finish_test() {
        let bw = BitWriter::new(8);
        assert_eq!(bw.finish(), Vec::<u8>::new());
    }
}
