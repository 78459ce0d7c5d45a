use crate::types::HeaderMatchRule;

const WILDCARD: char = '*';

/// Compile a header value pattern into a header matcher.
///
/// A pattern without `*` at either end becomes an exact match. Otherwise the
/// leading and trailing runs of `*` are stripped, the middle is escaped and the
/// result is wrapped as `^.*<middle>.*$`. A `*` inside the value is literal.
pub fn compile_header_matcher(name: &str, pattern: &str) -> HeaderMatchRule {
    if !is_wildcard_pattern(pattern) {
        return HeaderMatchRule::exact(name, pattern);
    }

    let middle = pattern
        .trim_start_matches(WILDCARD)
        .trim_end_matches(WILDCARD);
    HeaderMatchRule::regex(name, format!("^.*{}.*$", regex::escape(middle)))
}

/// Whether the pattern carries a wildcard at its start or end
pub fn is_wildcard_pattern(pattern: &str) -> bool {
    pattern.starts_with(WILDCARD) || pattern.ends_with(WILDCARD)
}
