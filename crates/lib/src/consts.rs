//! Names shared by the store, the record slot and the CLI.

/// Directory under the documents root that holds sample files.
pub const SAMPLEDATA_DIR: &str = "sampledata";

/// Suffix appended to a sample file name to form its lock marker.
pub const LOCK_SUFFIX: &str = ".lock";

/// Content of a held lock marker.
pub const LOCK_CONTENT: &str = "true";

/// File name of the first record, stored directly under the documents root.
pub const RECORD_FILENAME: &str = "user";

/// Directory next to the executable that holds bundled resources.
pub const BUNDLE_DIR: &str = "resources";

/// Prefix of the temp files written before an atomic rename.
pub const TEMP_PREFIX: &str = ".tmp";
