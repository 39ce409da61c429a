//! The tools module provides the helper pieces around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Frequency count of the input bytes, one slot per codable symbol.
//! - header: The readable frequency line that travels in front of the packed data.
//!
pub mod cli;
pub mod freq_count;
pub mod header;
