use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::code::CodeTable;
use crate::huffman_coding::codec::encode_symbols;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::HzOpts;
use crate::tools::freq_count::count_freqs;
use crate::tools::header::encode_header;

/// Suffix appended to compressed file names.
pub const SUFFIX: &str = ".hz";

/// Compress a whole input into the output layout: the frequency header
/// line, then every symbol's code packed MSB first and zero padded to the
/// byte boundary. An empty input compresses to the bare header line.
pub fn encode_bytes(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let freqs = count_freqs(data)?;
    let mut out = encode_header(&freqs).into_bytes();
    if data.is_empty() {
        return Ok(out);
    }

    let root = build_tree(&freqs)?;
    let codes = CodeTable::from_tree(&root);

    let mut bw = BitWriter::new(data.len());
    encode_symbols(data, &codes, &mut bw)?;
    debug!(
        "Coded {} symbols ({} distinct) into {} bits.",
        data.len(),
        freqs.distinct(),
        bw.bit_count()
    );
    out.extend(bw.finish());
    Ok(out)
}

/// Compress every input file named in opts, writing `<name>.hz` beside it.
/// The input file is removed after a successful write unless opts says to
/// keep it.
pub fn compress(opts: &HzOpts) -> Result<(), HuffError> {
    if opts.files.is_empty() {
        warn!("No input files named, nothing to do.");
    }

    for fname in &opts.files {
        let data = fs::read(fname)?;

        let mut out_name = fname.clone();
        out_name.push_str(SUFFIX);
        let out = encode_bytes(&data)?;
        write_output(&out_name, &out, opts.force_overwrite)?;

        info!(
            "Compressed {} from {} to {} bytes ({:.1}%).",
            fname,
            data.len(),
            out.len(),
            out.len() as f64 / data.len().max(1) as f64 * 100.0
        );

        if !opts.keep_input_files {
            fs::remove_file(fname)?;
        }
    }
    Ok(())
}

/// Write an output file, refusing to clobber an existing one unless forced.
pub(crate) fn write_output(path: &str, data: &[u8], force: bool) -> Result<(), HuffError> {
    if !force && Path::new(path).exists() {
        return Err(HuffError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists, use --force to overwrite", path),
        )));
    }
    let mut f_out = File::create(path)?;
    f_out.write_all(data)?;
    Ok(())
}
