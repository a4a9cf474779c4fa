use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

use crate::errors::Result;

/// Number of bytes hashed per read.
pub const SHA1_CHUNK_SIZE: usize = 1 << 16;

///
/// Compute the SHA-1 of everything a reader yields, in fixed size chunks.
///
/// # Returns
///
/// The lowercase hexadecimal digest.
///
pub fn sha1sum_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; SHA1_CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

///
/// Compute the SHA-1 of a file without loading it into memory.
///
/// # Arguments
///
/// - path: file to hash
///
pub fn sha1sum<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path.as_ref())?;
    Ok(sha1sum_reader(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
    )]
    fn test_sha1sum_reader(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(sha1sum_reader(Cursor::new(data)).unwrap(), expected);
    }

    #[rstest]
    fn test_sha1sum_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(
            sha1sum(file.path()).unwrap(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[rstest]
    fn test_sha1sum_spans_chunks() {
        // one million 'a' is a standard SHA-1 test vector and covers many chunk boundaries
        let data = vec![b'a'; 1_000_000];
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, &data).unwrap();

        assert_eq!(
            sha1sum(file.path()).unwrap(),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
        );
    }

    #[rstest]
    fn test_sha1sum_missing_file() {
        assert!(sha1sum("does/not/exist").is_err());
    }
}
