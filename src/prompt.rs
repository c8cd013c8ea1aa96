//! Interactive generation session
//!
//! This module contains the console session: sequential prompts for the
//! naming pattern, the output format, and the copy count, followed by the
//! generation run and an outer "run again?" loop. Invalid input at any
//! prompt triggers a re-prompt, never a process exit.

use std::io::{self, Write};

use anyhow::{anyhow, Result};
use colored::Colorize;
use log::error;

use crate::errors::{empty_pattern_error, invalid_count_error, Error};
use crate::format::DocumentFormat;
use crate::generate::{generate, GenerationReport, GenerationRequest};
use crate::logging::format_message;
use crate::settings::Settings;

/// Runs interactive generation sessions until the user declines to continue
///
/// # Arguments
/// * `settings` - Settings carrying the output root
/// * `dry_run` - Resolve target paths without writing any files
///
/// # Returns
/// * `Result<()>` - Success or an error
///
/// # Errors
/// Returns an error if the input stream closes
pub fn run_session(settings: &Settings, dry_run: bool) -> Result<()> {
    loop {
        let request = prompt_request()?;
        match generate(&request, &settings.output_root, dry_run) {
            Ok(report) => report_outcome(&report, dry_run),
            // A batch that cannot start is reported and the session goes on
            Err(e) => error!("{e}"),
        }

        let question = "Do you want to run the program again? (y/n):";
        println!(
            "{}",
            format_message(question, &question.yellow().bold().to_string())
        );
        let answer = read_line()?.to_lowercase();
        if answer != "y" && answer != "yes" {
            break;
        }
    }

    Ok(())
}

/// Prints the per-run summary and any per-file failures
fn report_outcome(report: &GenerationReport, dry_run: bool) {
    if dry_run {
        let message = format!("Files that would be created: {}", report.planned.len());
        println!(
            "{}",
            format_message(&message, &message.yellow().bold().to_string())
        );
        return;
    }

    let message = format!("Total files created: {}", report.created);
    println!(
        "{}",
        format_message(&message, &message.green().bold().to_string())
    );

    for failure in &report.failures {
        error!("{}", failure.error);
    }
    if !report.failures.is_empty() {
        let message = format!("Files that could not be created: {}", report.failures.len());
        println!(
            "{}",
            format_message(&message, &message.red().bold().to_string())
        );
    }
}

/// Prompts for one complete generation request
fn prompt_request() -> Result<GenerationRequest> {
    let pattern = prompt_pattern()?;
    let format = prompt_format()?;
    let count = prompt_count()?;

    Ok(GenerationRequest {
        pattern,
        format,
        count,
    })
}

/// Prompts for the naming pattern until a non-empty one is entered
fn prompt_pattern() -> Result<String> {
    loop {
        let prompt = "Enter the naming pattern (File_0_Content):";
        println!(
            "{}",
            format_message(prompt, &prompt.cyan().bold().to_string())
        );

        match parse_pattern(&read_line()?) {
            Ok(pattern) => return Ok(pattern),
            Err(e) => print_input_error(&e),
        }
    }
}

/// Prompts for the output format until a valid menu selection is entered
fn prompt_format() -> Result<DocumentFormat> {
    loop {
        let header = "Select file type:";
        println!(
            "{}",
            format_message(header, &header.yellow().bold().to_string())
        );
        let menu = DocumentFormat::menu();
        println!("{}", format_message(&menu, &menu.yellow().to_string()));

        let prompt = "Enter the number of your choice:";
        println!(
            "{}",
            format_message(prompt, &prompt.magenta().to_string())
        );

        match DocumentFormat::from_menu_choice(&read_line()?) {
            Ok(format) => return Ok(format),
            Err(e) => print_input_error(&e),
        }
    }
}

/// Prompts for the copy count until a positive integer is entered
fn prompt_count() -> Result<u32> {
    loop {
        let prompt = "Enter the number of copies to create:";
        println!(
            "{}",
            format_message(prompt, &prompt.cyan().bold().to_string())
        );

        match parse_count(&read_line()?) {
            Ok(count) => return Ok(count),
            Err(e) => print_input_error(&e),
        }
    }
}

/// Validates a raw naming pattern input
///
/// The pattern is trimmed but otherwise kept verbatim; illegal characters
/// are handled later by sanitization, not rejected here.
pub fn parse_pattern(input: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(empty_pattern_error())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Validates a raw copy count input
///
/// Accepts positive integers only; zero, negative numbers, and non-numeric
/// input are rejected.
pub fn parse_count(input: &str) -> Result<u32, Error> {
    match input.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(invalid_count_error(input)),
    }
}

/// Prints a validation error before the prompt loops again
fn print_input_error(error: &Error) {
    let message = error.to_string();
    println!(
        "{}",
        format_message(&message, &message.red().bold().to_string())
    );
}

/// Reads a line from standard input
///
/// # Errors
/// Returns an error if the input stream has closed or cannot be read
fn read_line() -> Result<String> {
    let mut input = String::new();
    io::stdout().flush()?;
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(anyhow!("Input stream closed"));
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        // Test a plain pattern passes through trimmed
        assert_eq!(parse_pattern(" Report_0 \n").unwrap(), "Report_0");

        // Test empty and whitespace-only input is rejected
        assert!(parse_pattern("").is_err());
        assert!(parse_pattern("   \n").is_err());
    }

    #[test]
    fn test_parse_count() {
        // Test valid counts
        assert_eq!(parse_count("1").unwrap(), 1);
        assert_eq!(parse_count(" 25 \n").unwrap(), 25);

        // Test zero, negatives, and non-numeric input are rejected
        assert!(parse_count("0").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_count("three").is_err());
        assert!(parse_count("").is_err());
        assert!(parse_count("2.5").is_err());
    }
}
