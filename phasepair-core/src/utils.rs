use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Get a writer for stdout or a file path; a path ending in `.gz`
/// is compressed on the fly.
///
/// # Arguments
///
/// - path: path to the output file, or None for stdout
///
pub fn get_dynamic_writer(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let inner: Box<dyn Write> = match path {
        None => Box::new(io::stdout()),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            match is_gzipped(path) {
                true => Box::new(GzEncoder::new(file, Compression::default())),
                false => Box::new(file),
            }
        }
    };

    Ok(BufWriter::new(inner))
}
