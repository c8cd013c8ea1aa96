/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Placeholder character recognised in naming patterns
///
/// The first occurrence of this character in a pattern is replaced with the
/// sequential copy index.
pub const PLACEHOLDER: char = '0';

/// Stem used when sanitization would otherwise produce an empty filename
pub const FALLBACK_STEM: &str = "file";

/// Default directory that generated files are written into
///
/// Resolved relative to the run location unless overridden by settings or
/// the --output option.
pub const DEFAULT_OUTPUT_ROOT: &str = "Created-Files";

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "file_mint";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "file_mint";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific settings file";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Write generated files under this directory";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without creating any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";

/// Help text for the local-logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Keep the log file in the working directory instead of the config directory";

/// Default path for the settings file
pub const DEFAULT_CONFIG_PATH: &str = "mint.yaml";

/// Default filename for the log file
pub const LOG_FILE_DEFAULT: &str = "file_mint.log";
