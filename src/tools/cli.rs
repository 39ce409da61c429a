use std::fmt::{Display, Formatter};

use clap::Parser;

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command line interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A file compressor built on plain huffman coding",
    long_about = "
    Compresses each named file into <name>.hz, or restores it with -d.
    The compressed layout is a readable frequency header line followed by
    the huffman coded data packed into bytes. Input files are removed after
    a successful run unless -k is given."
)]
pub struct HzOpts {
    /// Names of files to process
    #[clap()]
    pub files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    pub keep_input_files: bool,

    /// Silently overwrite existing output files
    #[clap(short = 'f', long = "force")]
    pub force_overwrite: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (repeat for more detail)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u8,
}

impl HzOpts {
    /// Compress unless decompression was asked for.
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }

    /// Log level from the quiet and verbose flags. Warnings are the resting
    /// level, -q turns everything off.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HzOpts, Mode};
    use clap::Parser;

    #[test]
    fn default_mode_is_zip_test() {
        let opts = HzOpts::try_parse_from(["huffzip", "file.txt"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Zip);
        assert_eq!(opts.files, vec!["file.txt".to_string()]);
        assert!(!opts.keep_input_files);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn decompress_mode_test() {
        let opts = HzOpts::try_parse_from(["huffzip", "-d", "file.hz"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Unzip);
    }

    #[test]
    fn conflicting_modes_test() {
        assert!(HzOpts::try_parse_from(["huffzip", "-z", "-d", "file"]).is_err());
    }

    #[test]
    fn combined_flags_test() {
        let opts = HzOpts::try_parse_from(["huffzip", "-zkf", "file.txt"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Zip);
        assert!(opts.keep_input_files);
        assert!(opts.force_overwrite);
    }

    #[test]
    fn verbosity_levels_test() {
        let opts = HzOpts::try_parse_from(["huffzip", "file"]).unwrap();
        assert_eq!(opts.log_level(), log::LevelFilter::Warn);
        let opts = HzOpts::try_parse_from(["huffzip", "-v", "file"]).unwrap();
        assert_eq!(opts.log_level(), log::LevelFilter::Info);
        let opts = HzOpts::try_parse_from(["huffzip", "-vv", "file"]).unwrap();
        assert_eq!(opts.log_level(), log::LevelFilter::Debug);
        let opts = HzOpts::try_parse_from(["huffzip", "-vvvv", "file"]).unwrap();
        assert_eq!(opts.log_level(), log::LevelFilter::Trace);
        let opts = HzOpts::try_parse_from(["huffzip", "-q", "file"]).unwrap();
        assert_eq!(opts.log_level(), log::LevelFilter::Off);
    }
}
