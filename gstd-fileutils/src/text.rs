//! Naming conventions shared by task runners.

/// File name of the decompressed copy written by [`gunzip_if_zipped`](crate::gunzip_if_zipped).
pub const GUNZIPPED_FASTA_NAME: &str = "gunzipped.fasta";

/// File name of the gzipped JSON result written by [`dict_to_gzjson`](crate::dict_to_gzjson).
pub const TEMP_JSONGZ_NAME: &str = "temp_result.json.gz";

/// Message logged before a result record is written in verbose mode.
pub const PREWORDS_DICT_TO_GZJSON: &str = "Saving results as gzipped json";

/// Source of the default file names used around a task's working directory.
///
/// Every method has a default backed by the constants in this module, so an implementation
/// only overrides what it needs to change.
pub trait NamingConvention {
    fn gunzipped_fasta_name(&self) -> &str {
        GUNZIPPED_FASTA_NAME
    }

    fn temp_jsongz_name(&self) -> &str {
        TEMP_JSONGZ_NAME
    }
}

/// The stock naming convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNaming;

impl NamingConvention for DefaultNaming {}

#[cfg(test)]
mod tests {
    use super::*;

    struct RunScoped {
        json_name: String,
    }

    impl NamingConvention for RunScoped {
        fn temp_jsongz_name(&self) -> &str {
            &self.json_name
        }
    }

    #[test]
    fn test_default_naming_uses_constants() {
        let naming = DefaultNaming;
        assert_eq!(naming.gunzipped_fasta_name(), GUNZIPPED_FASTA_NAME);
        assert_eq!(naming.temp_jsongz_name(), TEMP_JSONGZ_NAME);
    }

    #[test]
    fn test_partial_override() {
        let naming = RunScoped {
            json_name: "run42.json.gz".to_string(),
        };
        assert_eq!(naming.temp_jsongz_name(), "run42.json.gz");
        assert_eq!(naming.gunzipped_fasta_name(), GUNZIPPED_FASTA_NAME);
    }
}
