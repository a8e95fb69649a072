//! Log message sanitization

/// Sanitize a log message to prevent log injection attacks
///
/// Replaces newlines, carriage returns, and tabs with escape sequences
/// to prevent attackers from injecting fake log entries. Applied to every
/// message before console or file output.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
