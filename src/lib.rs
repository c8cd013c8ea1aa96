pub use cli::*;
pub use errors::*;
pub use format::*;
pub use generate::*;
pub use settings::*;

pub mod cli;
pub mod constants;
pub mod errors;
pub mod format;
pub mod generate;
pub mod logging;
pub mod pattern;
pub mod prompt;
pub mod settings;
pub mod writers;

pub mod prelude {
    pub use crate::cli::{
        check_for_stdout_stream, get_config_path, get_log_file, get_matches, get_output_override,
        get_verbosity,
    };
    pub use crate::errors::{
        config_parsing_error, empty_pattern_error, file_operation_error, generic_error,
        invalid_count_error, invalid_filename_error, invalid_selection_error,
        path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::format::DocumentFormat;
    pub use crate::generate::{generate, GenerationReport, GenerationRequest};
    pub use crate::logging::{format_message, init_default_logger, init_logger, LogLevel};
    pub use crate::prompt::run_session;
    pub use crate::settings::Settings;
}
