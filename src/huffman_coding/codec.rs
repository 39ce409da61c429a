use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::code::CodeTable;
use crate::huffman_coding::node::HuffNode;

/// Encode every input byte through the code table onto the bit writer.
/// A byte with no assigned code means the table was built from different
/// data and fails the encode.
pub fn encode_symbols(data: &[u8], codes: &CodeTable, bw: &mut BitWriter) -> Result<(), HuffError> {
    for &el in data {
        match codes.get(el) {
            Some(code) => bw.push_code(code),
            None => return Err(HuffError::UnknownSymbol(el)),
        }
    }
    Ok(())
}

/// Decode exactly `count` symbols by walking the tree, 0 left and 1 right.
/// Pad bits after the last symbol stay unread.
pub fn decode_symbols(
    br: &mut BitReader<'_>,
    root: &HuffNode,
    count: u64,
) -> Result<Vec<u8>, HuffError> {
    // A symbol consumes at least one bit, so the stream length also caps
    // the allocation when a header advertises a wild count.
    let mut out = Vec::with_capacity(count.min(br.remaining()) as usize);
    for _ in 0..count {
        out.push(decode_one(br, root)?);
    }
    Ok(out)
}

/// Decode until the bit stream runs out at a symbol boundary. For streams
/// that carry no symbol count and no padding.
pub fn decode_to_end(br: &mut BitReader<'_>, root: &HuffNode) -> Result<Vec<u8>, HuffError> {
    let mut out = Vec::new();
    while br.remaining() > 0 {
        out.push(decode_one(br, root)?);
    }
    Ok(out)
}

/// Walk from the root to the next leaf. A lone leaf root consumes one bit
/// per symbol, matching the single-bit code the encoder assigns it.
fn decode_one(br: &mut BitReader<'_>, root: &HuffNode) -> Result<u8, HuffError> {
    if root.is_leaf() {
        return match br.bit() {
            Some(_) => Ok(root.symbol),
            None => Err(HuffError::TruncatedStream),
        };
    }
    let mut node = root;
    while let Some((left, right)) = node.children() {
        match br.bit() {
            Some(false) => node = left,
            Some(true) => node = right,
            None => return Err(HuffError::TruncatedStream),
        }
    }
    Ok(node.symbol)
}
