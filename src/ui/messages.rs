use crate::errors::{AppError, AppResult};
use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header above a list or a detail view.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}== {} =={}\n", FG_BLUE, BOLD, msg, RESET);
}

/// One "label: value" line of a detail view.
pub fn detail<T: fmt::Display>(label: &str, value: T) {
    println!("  {}{:<18}{} {}", BOLD, format!("{label}:"), RESET, value);
}

/// Greyed footer line (page counters, hints).
pub fn footer<T: fmt::Display>(msg: T) {
    println!("{}{}{}", DIM, msg, RESET);
}

/// Print a command failure. Validation failures list one field per line.
pub fn report(err: &AppError) {
    match err.field_errors() {
        Some(fields) => {
            error("Invalid input:");
            for f in fields {
                eprintln!("   {}{}{}: {}", BOLD, f.field, RESET, f.message);
            }
        }
        None => error(format!("Error: {err}")),
    }
}

/// Long free text under a label, wrapped to the terminal-friendly width.
pub fn paragraph(label: &str, text: &str) {
    println!("  {}{}:{}", BOLD, label, RESET);
    if text.trim().is_empty() {
        println!("    -");
        return;
    }
    let opts = textwrap::Options::new(76)
        .initial_indent("    ")
        .subsequent_indent("    ");
    println!("{}", textwrap::fill(text.trim(), opts));
}

/// Print `question [y/N]: ` and read one line. Accepts y/yes and s/si/sí.
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}
