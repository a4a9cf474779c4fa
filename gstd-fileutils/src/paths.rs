use std::borrow::Cow;
use std::path::Path;

use percent_encoding::percent_decode_str;
use url::Url;

///
/// Get the file identifier of a genome from its storage URL.
///
/// The identifier is the file name up to its first `.`, so multi-suffix names such as
/// `NC_0001.fasta.gz` give `NC_0001`. Strings that are not absolute URLs are read as bare
/// paths. The file name of a URL is percent-decoded, so `my%20genome.fa` and `my genome.fa`
/// both give `my genome`. A URL without a path (`s3://bucket`) gives an empty identifier.
///
/// # Arguments
///
/// - url: object storage URL or path of the genome file
/// - _is_verbose: accepted for compatibility with existing callers, currently has no effect
///
pub fn get_fileid(url: &str, _is_verbose: bool) -> String {
    let parsed = Url::parse(url);
    let (path, is_url) = match &parsed {
        Ok(parsed) => (parsed.path(), true),
        Err(_) => (strip_query_and_fragment(url), false),
    };

    let Some(file_name) = Path::new(path).file_name().and_then(|name| name.to_str()) else {
        return String::new();
    };
    let file_name: Cow<str> = if is_url {
        percent_decode_str(file_name).decode_utf8_lossy()
    } else {
        Cow::Borrowed(file_name)
    };

    file_name.split('.').next().unwrap_or_default().to_string()
}

fn strip_query_and_fragment(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

///
/// Build the upload location of an analysis record, sharded by the identifier's first two
/// characters: `base/<fileid[..2]>/<fileid><extension>`.
///
/// Components are joined with `/` the way a POSIX path join does it: no separator is added
/// after one that is already there, and a component starting with `/` starts over. Nothing
/// is checked against the filesystem.
///
/// # Arguments
///
/// - base: prefix of the upload location
/// - fileid: identifier of the analysed genome
/// - extension: extension of the record, including the leading dot
///
pub fn get_upload_path(base: &str, fileid: &str, extension: &str) -> String {
    let shard: String = fileid.chars().take(2).collect();
    let file_name = format!("{}{}", fileid, extension);

    [shard.as_str(), file_name.as_str()]
        .iter()
        .fold(base.to_string(), |joined, part| join_key(joined, part))
}

fn join_key(mut joined: String, part: &str) -> String {
    if part.starts_with('/') {
        return part.to_string();
    }
    if !joined.is_empty() && !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(part);
    joined
}
