//! The compression module ties the pipeline stages to whole files.
//!
//! Compression happens in the following steps:
//! - Frequency count: one pass over the input, one slot per codable byte.
//! - Tree build: merge the lightest nodes until one root remains. Ties are broken
//!   by symbol value, so the same counts always give the same tree.
//! - Code generation: the path to each leaf becomes that symbol's bit code.
//! - Output: the counts as a readable header line, then every code packed MSB
//!   first and zero padded to the byte boundary.
//!
//! Decompression follows the inverse: parse the header line, rebuild the identical
//! tree from the counts, and walk it bit by bit until exactly the promised number
//! of symbols has been restored. The pad bits are never decoded.
//!
//! Both directions process one whole file at a time, in memory.

pub mod compress;
pub mod decompress;
