//! Result records and their gzipped JSON form.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::printer::printer;
use crate::text::PREWORDS_DICT_TO_GZJSON;

/// The record a task publishes for one analysed genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResult {
    #[serde(rename = "fileId")]
    pub file_id: String,
    pub task: String,
    pub task_version: String,
    pub stdlib_version: String,
    pub results: Value,
}

///
/// Assemble the result record of a task. Values are taken as they are.
///
/// # Arguments
///
/// - fileid: identifier of the analysed genome
/// - task: name of the analysis
/// - task_version: version of the analysis
/// - stdlib_version: version of this library used by the task
/// - results: the task's own output
///
pub fn define_json_result(
    fileid: &str,
    task: &str,
    task_version: &str,
    stdlib_version: &str,
    results: Value,
) -> JsonResult {
    JsonResult {
        file_id: fileid.to_string(),
        task: task.to_string(),
        task_version: task_version.to_string(),
        stdlib_version: stdlib_version.to_string(),
        results,
    }
}

///
/// Write a record as gzipped JSON into the working directory, replacing any existing file.
///
/// # Arguments
///
/// - record: anything serializable, usually a [`JsonResult`]
/// - working_dir: directory that receives the file
/// - is_verbose: log a message through [`printer`] before writing
/// - temp_jsongz_name: file name of the output
///
/// # Returns
///
/// The path of the written file.
///
pub fn dict_to_gzjson<T, D>(
    record: &T,
    working_dir: D,
    is_verbose: bool,
    temp_jsongz_name: &str,
) -> Result<PathBuf>
where
    T: Serialize + ?Sized,
    D: AsRef<Path>,
{
    if is_verbose {
        printer(PREWORDS_DICT_TO_GZJSON);
    }

    let file_path = working_dir.as_ref().join(temp_jsongz_name);

    let file = File::create(&file_path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, record)?;
    encoder.finish()?.flush()?;

    Ok(file_path)
}

/// Read back a file written by [`dict_to_gzjson`].
pub fn read_gzjson<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    let decoder = MultiGzDecoder::new(BufReader::new(file));
    Ok(serde_json::from_reader(BufReader::new(decoder))?)
}
