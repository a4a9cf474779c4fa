//! FASTA format checks.
//!
//! The actual validation is delegated to a [`FastaValidator`], so callers can plug in an
//! external tool or a stub. [`FastaFormatValidator`] is the built-in implementation.
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::{FileUtilsError, Result};

/// Status returned for a well formed FASTA file.
pub const FASTA_OK: i32 = 0;
/// No header where one is required, or a header without an identifier.
pub const FASTA_BAD_HEADER: i32 = 1;
/// Two records share an identifier.
pub const FASTA_DUPLICATE_ID: i32 = 2;
/// A sequence line holds a character outside the sequence alphabet.
pub const FASTA_BAD_SEQUENCE: i32 = 4;

/// Something that can tell whether a file is FASTA. A status of `0` means valid.
pub trait FastaValidator {
    fn validate(&self, path: &Path) -> io::Result<i32>;
}

impl<F> FastaValidator for F
where
    F: Fn(&Path) -> io::Result<i32>,
{
    fn validate(&self, path: &Path) -> io::Result<i32> {
        self(path)
    }
}

/// Line based FASTA validator.
///
/// Lines are checked as raw bytes, so content that is not text (a binary file, a gzip stream
/// that was never decompressed) gets a non-zero status instead of an IO error. Blank lines are
/// skipped and `\r\n` line endings are accepted.
///
/// Status codes:
/// - `0`: valid
/// - `1`: the first non-blank line is not a `>` header, the file is empty, or a header has no
///   identifier
/// - `2`: an identifier (first word of a header) appears twice
/// - `4`: a sequence line holds a byte other than an ASCII letter, `*` or `-`
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaFormatValidator;

impl FastaFormatValidator {
    /// Validate FASTA content from any buffered reader.
    pub fn validate_reader<R: BufRead>(&self, reader: R) -> io::Result<i32> {
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut in_record = false;

        for line in reader.split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);
            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            if let Some(header) = line.strip_prefix(b">") {
                let header = String::from_utf8_lossy(header);
                let id = match header.split_whitespace().next() {
                    Some(id) => id,
                    None => return Ok(FASTA_BAD_HEADER),
                };
                if !seen_ids.insert(id.to_string()) {
                    return Ok(FASTA_DUPLICATE_ID);
                }
                in_record = true;
            } else if !in_record {
                return Ok(FASTA_BAD_HEADER);
            } else if !line.iter().copied().all(is_sequence_byte) {
                return Ok(FASTA_BAD_SEQUENCE);
            }
        }

        if in_record {
            Ok(FASTA_OK)
        } else {
            Ok(FASTA_BAD_HEADER)
        }
    }
}

impl FastaValidator for FastaFormatValidator {
    fn validate(&self, path: &Path) -> io::Result<i32> {
        let file = File::open(path)?;
        self.validate_reader(BufReader::new(file))
    }
}

fn is_sequence_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'*' || b == b'-'
}

///
/// Check that a file is FASTA, handing back its path when it is.
///
/// # Arguments
///
/// - validator: the validator to delegate to
/// - path: path to the candidate FASTA file
///
/// # Errors
///
/// [`FileUtilsError::InvalidFormat`] when the validator reports a non-zero status, or the
/// validator's own IO error.
///
pub fn test_fasta<V, P>(validator: &V, path: P) -> Result<PathBuf>
where
    V: FastaValidator + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let status = validator.validate(path)?;
    if status != FASTA_OK {
        return Err(FileUtilsError::InvalidFormat {
            path: path.to_path_buf(),
            status,
        });
    }
    Ok(path.to_path_buf())
}
