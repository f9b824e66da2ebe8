//! Path-fragment to identifier conversion.

/// Initialisms that are emitted fully upper-cased instead of title-cased.
///
/// Only entries that are highly unlikely to be ordinary words belong here;
/// "ID" is fine, "AND" is not. Mirrors the golint list.
pub const COMMON_INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML", "XSRF", "XSS",
];

fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '.' | '_') || c.is_whitespace()
}

/// Convert a flattened key path into a CamelCase identifier.
///
/// The path is split on runs of `-`, `.`, `_`, and whitespace. Fragments whose
/// upper-cased form is a known initialism are emitted fully upper-cased;
/// all other fragments get their first character upper-cased and the rest
/// left untouched (e.g. "http-server" -> "HTTPServer", "foo_bar" -> "FooBar").
pub fn to_identifier(path: &str) -> String {
    path.split(is_delimiter)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let upper = fragment.to_uppercase();
            if COMMON_INITIALISMS.contains(&upper.as_str()) {
                upper
            } else {
                let mut chars = fragment.chars();
                match chars.next() {
                    None => String::new(),
                    Some(c) => {
                        // Single-character mappings only: "ß" has no
                        // one-character uppercase form and stays unchanged.
                        let mut upper = c.to_uppercase();
                        let first = match (upper.next(), upper.next()) {
                            (Some(u), None) => u,
                            _ => c,
                        };
                        std::iter::once(first).chain(chars).collect()
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_words() {
        assert_eq!(to_identifier("foo_bar"), "FooBar");
        assert_eq!(to_identifier("server.port"), "ServerPort");
        assert_eq!(to_identifier("hello world"), "HelloWorld");
    }

    #[test]
    fn test_initialisms() {
        assert_eq!(to_identifier("http-server"), "HTTPServer");
        assert_eq!(to_identifier("user.id"), "UserID");
        assert_eq!(to_identifier("api.base-url"), "APIBaseURL");
    }

    #[test]
    fn test_mixed_case_initialism_normalized() {
        assert_eq!(to_identifier("Http"), "HTTP");
        assert_eq!(to_identifier("uuid"), "UUID");
    }

    #[test]
    fn test_rest_of_fragment_untouched() {
        // Only the first character's case is forced
        assert_eq!(to_identifier("fooBar"), "FooBar");
        assert_eq!(to_identifier("hElLo"), "HElLo");
    }

    #[test]
    fn test_empty_and_delimiter_runs() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("..--__"), "");
        assert_eq!(to_identifier("a--b"), "AB");
        assert_eq!(to_identifier(".leading.trailing."), "LeadingTrailing");
    }

    #[test]
    fn test_single_character_uppercase_mapping() {
        assert_eq!(to_identifier("école"), "École");
        // "ß" uppercases to the two-character "SS"; the first character is
        // left unchanged instead
        assert_eq!(to_identifier("ßeta"), "ßeta");
    }

    #[test]
    fn test_sequence_indices() {
        assert_eq!(to_identifier("hosts.0"), "Hosts0");
    }

    #[test]
    fn test_deterministic() {
        let input = "retry.max-attempts";
        assert_eq!(to_identifier(input), to_identifier(input));
    }
}
