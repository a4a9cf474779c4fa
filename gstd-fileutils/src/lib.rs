//! # File handling helpers for genome analysis tasks
//!
//! Small, stateless utilities shared by task runners. They chain naturally in caller code:
//! a downloaded FASTA is gunzipped if needed, validated, hashed, and the task's output is
//! written as a gzipped JSON result record next to it.
//!
//! ```no_run
//! use gstd_fileutils::{
//!     define_json_result, dict_to_gzjson, get_fileid, gunzip_if_zipped, sha1sum, test_fasta,
//!     DefaultNaming, FastaFormatValidator, NamingConvention,
//! };
//! use std::path::Path;
//!
//! # fn main() -> gstd_fileutils::Result<()> {
//! let naming = DefaultNaming;
//! let work = Path::new("/tmp/work");
//! let fasta = gunzip_if_zipped(work.join("download"), work, naming.gunzipped_fasta_name())?;
//! let fasta = test_fasta(&FastaFormatValidator, fasta)?;
//!
//! let fileid = get_fileid("s3://bucket/genomes/NC_0001.fasta.gz", false);
//! let record = define_json_result(
//!     &fileid,
//!     "sha1",
//!     "1.0",
//!     env!("CARGO_PKG_VERSION"),
//!     serde_json::json!({ "sha1": sha1sum(&fasta)? }),
//! );
//! dict_to_gzjson(&record, work, true, naming.temp_jsongz_name())?;
//! # Ok(())
//! # }
//! ```
pub mod digest;
pub mod errors;
pub mod fasta;
pub mod gzip;
pub mod paths;
pub mod printer;
pub mod results;
pub mod text;

// re-expose core functions
pub use digest::*;
pub use errors::*;
pub use fasta::*;
pub use gzip::*;
pub use paths::*;
pub use printer::*;
pub use results::*;
pub use text::*;
