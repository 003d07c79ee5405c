//! Store namespace parsing
//!
//! Users type namespaces as `a.b.c` or `a,b,c` (or a mix); the store API
//! wants them as a list of segments.

const SEPARATORS: [char; 2] = ['.', ','];

/// Split a user-entered namespace into trimmed, non-empty segments.
///
/// # Examples
/// ```
/// use langgraph_client_cli::parse_namespace;
///
/// assert_eq!(parse_namespace("users, prefs.theme"), vec!["users", "prefs", "theme"]);
/// assert_eq!(parse_namespace("single"), vec!["single"]);
/// ```
pub fn parse_namespace(raw: &str) -> Vec<String> {
    raw.split(SEPARATORS)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join segments back into the dotted form used in messages and query strings.
pub fn display_namespace(segments: &[String]) -> String {
    segments.join(".")
}
