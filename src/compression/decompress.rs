use std::fs;
use std::io;

use log::{debug, info, warn};

use crate::bitstream::bitreader::BitReader;
use crate::compression::compress::{write_output, SUFFIX};
use crate::error::HuffError;
use crate::huffman_coding::codec::decode_symbols;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::HzOpts;
use crate::tools::header::decode_header;

/// Reverse of encode_bytes: parse the header line, rebuild the tree from
/// the counts and decode exactly the number of symbols the header promises.
/// The tree build is deterministic, so the decode tree always matches the
/// one the encoder used.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    // Nothing at all decodes as the empty input.
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let newline = data
        .iter()
        .position(|&el| el == b'\n')
        .ok_or_else(|| HuffError::MalformedHeader("missing header line".to_string()))?;
    let line = std::str::from_utf8(&data[..newline])
        .map_err(|_| HuffError::MalformedHeader("header is not readable text".to_string()))?;

    let freqs = decode_header(line)?;
    let total = freqs.total();
    if total == 0 {
        return Ok(Vec::new());
    }

    let root = build_tree(&freqs)?;
    let mut br = BitReader::new(&data[newline + 1..]);
    let out = decode_symbols(&mut br, &root, total)?;
    debug!(
        "Decoded {} symbols from {} packed bytes.",
        total,
        data.len() - newline - 1
    );
    Ok(out)
}

/// Decompress every input file named in opts. The output name drops the
/// `.hz` suffix; a file without that suffix is refused. The input file is
/// removed after a successful write unless opts says to keep it.
pub fn decompress(opts: &HzOpts) -> Result<(), HuffError> {
    if opts.files.is_empty() {
        warn!("No input files named, nothing to do.");
    }

    for fname in &opts.files {
        let out_name = match fname.strip_suffix(SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => {
                return Err(HuffError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} does not end in {}", fname, SUFFIX),
                )))
            }
        };

        let data = fs::read(fname)?;
        let out = decode_bytes(&data)?;
        write_output(&out_name, &out, opts.force_overwrite)?;

        info!("Decompressed {} to {} ({} bytes).", fname, out_name, out.len());

        if !opts.keep_input_files {
            fs::remove_file(fname)?;
        }
    }
    Ok(())
}
