use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::errors::Result;

/// The two leading bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

///
/// Check whether a file is gzip compressed by looking at its magic bytes.
///
/// Reads at most two bytes. Empty and one byte files are not gzipped.
///
/// # Arguments
///
/// - path: file to check
///
pub fn is_gz_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let file = File::open(path.as_ref())?;
    let mut magic = Vec::with_capacity(GZIP_MAGIC.len());
    file.take(GZIP_MAGIC.len() as u64).read_to_end(&mut magic)?;
    Ok(magic == GZIP_MAGIC)
}

///
/// Decompress a file into the working directory if, and only if, it is gzipped.
///
/// The source file is left untouched. Multi-member gzip files are decoded in full.
///
/// # Arguments
///
/// - path: path to a possibly gzipped file
/// - working_dir: directory that receives the decompressed copy
/// - gunzipped_name: file name of the decompressed copy
///
/// # Returns
///
/// The path to the decompressed copy, or `path` unchanged when it was not gzipped.
///
pub fn gunzip_if_zipped<P, D>(path: P, working_dir: D, gunzipped_name: &str) -> Result<PathBuf>
where
    P: AsRef<Path>,
    D: AsRef<Path>,
{
    let path = path.as_ref();
    if !is_gz_file(path)? {
        return Ok(path.to_path_buf());
    }

    let gunzipped_path = working_dir.as_ref().join(gunzipped_name);

    let mut decoder = MultiGzDecoder::new(BufReader::new(File::open(path)?));
    let mut writer = BufWriter::new(File::create(&gunzipped_path)?);
    io::copy(&mut decoder, &mut writer)?;
    writer.flush()?;

    Ok(gunzipped_path)
}
