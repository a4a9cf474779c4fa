//! Integration test for the usual task flow:
//! download → gunzip → validate → hash → serialize → upload path.

use std::fs::{self, File};
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use gstd_fileutils::{
    define_json_result, dict_to_gzjson, get_fileid, get_upload_path, gunzip_if_zipped,
    is_gz_file, read_gzjson, sha1sum, test_fasta, DefaultNaming, FastaFormatValidator,
    FileUtilsError, JsonResult, NamingConvention,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

const FASTA: &[u8] = b">NC_0001.1 test genome\nACGTACGTACGTACGT\nGGCCAATT\n>plasmid\nTTTTAAAA\n";

#[test]
fn test_gzipped_download_to_result_record() -> anyhow::Result<()> {
    let work = tempdir()?;
    let naming = DefaultNaming;

    let download = work.path().join("download");
    let mut encoder = GzEncoder::new(File::create(&download)?, Compression::best());
    encoder.write_all(FASTA)?;
    encoder.finish()?;

    let fasta = gunzip_if_zipped(&download, work.path(), naming.gunzipped_fasta_name())?;
    assert_eq!(fasta, work.path().join(naming.gunzipped_fasta_name()));
    assert!(!is_gz_file(&fasta)?);

    let fasta = test_fasta(&FastaFormatValidator, &fasta)?;

    let plain = work.path().join("reference.fa");
    fs::write(&plain, FASTA)?;
    assert_eq!(sha1sum(&fasta)?, sha1sum(&plain)?);

    let fileid = get_fileid("s3://genomes/refseq/NC_0001.fasta.gz", false);
    let record = define_json_result(
        &fileid,
        "sha1",
        "1.0.0",
        env!("CARGO_PKG_VERSION"),
        json!({ "sha1": sha1sum(&fasta)? }),
    );
    let output = dict_to_gzjson(&record, work.path(), false, naming.temp_jsongz_name())?;

    let back: JsonResult = read_gzjson(&output)?;
    assert_eq!(back, record);
    assert_eq!(back.file_id, "NC_0001");

    assert_eq!(
        get_upload_path("s3://results/sha1", &fileid, ".json.gz"),
        "s3://results/sha1/NC/NC_0001.json.gz"
    );
    Ok(())
}

#[test]
fn test_plain_download_that_is_not_fasta() -> anyhow::Result<()> {
    let work = tempdir()?;
    let download = work.path().join("download");
    fs::write(&download, "<html>not found</html>\n")?;

    let path = gunzip_if_zipped(&download, work.path(), DefaultNaming.gunzipped_fasta_name())?;
    assert_eq!(path, download);

    let err = test_fasta(&FastaFormatValidator, &path).unwrap_err();
    assert!(matches!(err, FileUtilsError::InvalidFormat { status: 1, .. }));
    assert!(err.to_string().starts_with("File not in FASTA format"));
    Ok(())
}
