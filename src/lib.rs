//! huffzip compresses and restores files with plain huffman coding.
//!
//! The whole input is coded with a single tree built from the byte frequencies
//! of the data. The compressed layout is a readable frequency header line
//! followed by the bit codes packed into bytes. Rebuilding the tree from the
//! header gives back exactly the tree the encoder used, so no code table
//! travels in the file.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.hz.
//! The original file will be deleted unless -k is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
