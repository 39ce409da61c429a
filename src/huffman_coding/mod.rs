//! The huffman_coding module builds the coding tree and turns it into the bit codes
//! that compress and restore the data.
//!
//! Coding happens in three steps:
//! - node/tree: merge the two lightest nodes over and over until one root holds every
//!   counted symbol. Ties on weight fall to the smallest leaf symbol under each node,
//!   which makes the tree a pure function of the counts.
//! - code: walk the finished tree and record the path to each leaf, 0 for a left edge
//!   and 1 for a right edge. Frequent symbols sit near the root and get short codes.
//! - codec: stream input bytes through the code table, and walk the tree bit by bit
//!   to restore them.
//!
//! The whole input is coded with one tree, so encode and decode agree as long as both
//! sides build from the same frequency counts. The decode side gets those counts from
//! the header line that travels with the compressed data.

pub mod code;
pub mod codec;
pub mod node;
pub mod tree;
