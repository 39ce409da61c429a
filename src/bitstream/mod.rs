//! The bitstream module packs and unpacks the bit-level side of the compressed layout.
//!
//! Huffman codes have odd bit lengths, so the writer queues bits and drains whole bytes
//! to the output, padding the last byte with zeros in the least significant positions.
//! The reader walks those bytes bit by bit from the most significant end.
//!
//! Both halves serve the coding modules inside this crate. They have not been generalized
//! for wider use.
pub mod bitreader;
pub mod bitwriter;
