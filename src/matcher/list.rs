/// How a single list pattern is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobMode {
    /// `*` on its own: matches everything
    Any,
    /// No wildcard at either end: byte-wise equality
    Exact,
    /// Trailing `*`: candidate must start with the rest
    Prefix,
    /// Leading `*`: candidate must end with the rest
    Suffix,
}

impl GlobMode {
    /// Classify a pattern. A trailing wildcard wins over a leading one.
    pub fn of(pattern: &str) -> Self {
        if pattern == "*" {
            GlobMode::Any
        } else if pattern.ends_with('*') {
            GlobMode::Prefix
        } else if pattern.starts_with('*') {
            GlobMode::Suffix
        } else {
            GlobMode::Exact
        }
    }
}

/// Check a candidate against a single glob pattern.
///
/// Equality is always accepted, so a pattern such as `*a*` still matches the
/// literal string `*a*`.
pub fn glob_match(candidate: &str, pattern: &str) -> bool {
    if candidate == pattern {
        return true;
    }

    match GlobMode::of(pattern) {
        GlobMode::Any => true,
        GlobMode::Exact => false,
        GlobMode::Prefix => pattern
            .strip_suffix('*')
            .is_some_and(|prefix| candidate.starts_with(prefix)),
        GlobMode::Suffix => pattern
            .strip_prefix('*')
            .is_some_and(|suffix| candidate.ends_with(suffix)),
    }
}

/// Check whether any pattern in the list matches the candidate.
///
/// An empty list never matches.
pub fn string_match<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> bool {
    patterns
        .iter()
        .any(|pattern| glob_match(candidate, pattern.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_match_cases() {
        let cases: &[(&str, &[&str], bool)] = &[
            ("exact match", &["review page", "product page"], true),
            ("wild character match", &["review page", "*"], true),
            ("prefix match", &["review page", "product*"], true),
            ("suffix match", &["review page", "*page"], true),
            ("not matched", &["review page", "xyz product page"], false),
        ];

        for (name, list, expect) in cases {
            assert_eq!(
                string_match("product page", *list),
                *expect,
                "{}: unexpected result",
                name
            );
        }
    }

    #[test]
    fn test_empty_list() {
        let empty: &[&str] = &[];
        assert!(!string_match("anything", empty));
        assert!(!string_match("", empty));
    }

    #[test]
    fn test_star_matches_empty_candidate() {
        assert!(string_match("", &["*"]));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!string_match("Product Page", &["product page"]));
        assert!(!string_match("Product Page", &["product*"]));
    }

    #[test]
    fn test_interior_wildcard_is_literal() {
        assert!(!string_match("product page", &["prod*page"]));
        assert!(string_match("prod*page", &["prod*page"]));
    }

    #[test]
    fn test_both_sided_pattern_uses_trailing_rule() {
        assert_eq!(GlobMode::of("*page*"), GlobMode::Prefix);
        // prefix of "*page" is compared literally
        assert!(!string_match("product page", &["*page*"]));
        assert!(string_match("*page one", &["*page*"]));
    }

    #[test]
    fn test_glob_mode() {
        assert_eq!(GlobMode::of("*"), GlobMode::Any);
        assert_eq!(GlobMode::of("abc"), GlobMode::Exact);
        assert_eq!(GlobMode::of("abc*"), GlobMode::Prefix);
        assert_eq!(GlobMode::of("*abc"), GlobMode::Suffix);
        assert_eq!(GlobMode::of(""), GlobMode::Exact);
    }
}
