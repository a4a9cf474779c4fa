use std::io::Write;

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

///
/// Build a log line: the timestamp in bold bright green, then the message.
///
/// # Arguments
///
/// - timestamp: already formatted date and time
/// - message: text to print after the timestamp
///
pub fn format_printer_line(timestamp: &str, message: &str) -> String {
    format!("\x1b[92m \x1b[1m {} \x1b[0m {}", timestamp, message)
}

///
/// Print a message to stderr, prefixed with the current local date and time.
///
/// Failing to write to stderr is not an error for the caller, so it is ignored.
///
pub fn printer(message: &str) {
    let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", format_printer_line(&now, message));
}
