use atty::Stream;
use clap::{command, crate_description, crate_name, crate_version, Arg, ArgMatches};
use std::path::PathBuf;

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, OUTPUT_HELP, VERBOSE_HELP,
};
use crate::errors::{generic_error, Result};
use crate::logging::LogLevel;
use crate::settings::find_project_folder;

/// Checks if stdout is a terminal and waits for user input if it is
///
/// This function is used to prevent the console window from closing
/// immediately after the program finishes when run from a GUI.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Sets up and returns command-line argument matches
///
/// Defines the following arguments:
/// - `config`: Path to the settings file
/// - `output`: Directory to write generated files into
/// - `dry`: Run without creating any files
/// - `verbose`: Increase verbosity level
/// - `log_file`: Path of the log file
/// - `log_locally`: Keep the log file in the working directory
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
pub fn get_matches() -> Result<ArgMatches> {
    // define arg for reading from a specific settings file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for overriding the output root
    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .help(OUTPUT_HELP);

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    let matches = command!()
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_output)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .get_matches();

    Ok(matches)
}

/// Gets the settings file path from the command-line arguments
///
/// # Errors
/// Returns an error if the config option is missing from the matches
pub fn get_config_path(matches: &ArgMatches) -> Result<PathBuf> {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .ok_or_else(|| generic_error("Settings file option not found"))
}

/// Gets the output root override from the command-line arguments, if any
pub fn get_output_override(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<String>("output").map(PathBuf::from)
}

/// Gets the verbosity level from the command-line arguments
///
/// Counts the occurrences of the "verbose" flag and converts the count to a
/// LogLevel value.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Resolves the log file path from the command-line arguments
///
/// Unless local logging was requested, the log file is placed in the
/// platform config directory for the application.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()
            .map_err(|e| generic_error(&format!("Failed to resolve log directory: {e}")))?;
        let path = folder.config_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
        Ok(path_str.to_string())
    }
}
