//! Link classification: navigable URL vs informational text.
//!
//! Catalog links are plain strings; whether one gets a navigation affordance
//! is decided by a pattern test, not a type tag.

/// How a link entry should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// An `http(s)://` URL; render with a navigation affordance.
    Navigable,
    /// Plain informational text; render without navigation.
    Informational,
}

/// Classify a link entry.
///
/// Navigable means: starts with `http://` or `https://` (scheme
/// case-insensitive) followed by at least one non-whitespace character.
/// Everything else, including scheme-only strings and malformed schemes
/// like `http:/missing-slash`, is informational.
#[must_use]
pub fn classify(link: &str) -> LinkKind {
    if has_scheme(link, "https://") || has_scheme(link, "http://") {
        LinkKind::Navigable
    } else {
        LinkKind::Informational
    }
}

/// Check if a link entry should be displayed at all.
///
/// Empty and whitespace-only entries are dropped before display.
#[must_use]
pub fn is_displayable(link: &str) -> bool {
    !link.trim().is_empty()
}

fn has_scheme(link: &str, scheme: &str) -> bool {
    link.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        && link[scheme.len()..].chars().any(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_navigable() {
        assert_eq!(classify("https://example.com/x"), LinkKind::Navigable);
    }

    #[test]
    fn test_http_url_is_navigable() {
        assert_eq!(classify("http://example.com"), LinkKind::Navigable);
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(classify("HTTPS://example.com"), LinkKind::Navigable);
        assert_eq!(classify("Http://example.com"), LinkKind::Navigable);
    }

    #[test]
    fn test_plain_text_is_informational() {
        assert_eq!(classify("Contact the office"), LinkKind::Informational);
    }

    #[test]
    fn test_missing_slash_is_informational() {
        assert_eq!(classify("http:/missing-slash"), LinkKind::Informational);
    }

    #[test]
    fn test_scheme_only_is_informational() {
        assert_eq!(classify("https://"), LinkKind::Informational);
        assert_eq!(classify("http://"), LinkKind::Informational);
    }

    #[test]
    fn test_scheme_then_whitespace_is_informational() {
        assert_eq!(classify("https://   "), LinkKind::Informational);
    }

    #[test]
    fn test_scheme_mid_string_is_informational() {
        assert_eq!(
            classify("see https://example.com"),
            LinkKind::Informational
        );
    }

    #[test]
    fn test_other_schemes_are_informational() {
        assert_eq!(classify("ftp://example.com"), LinkKind::Informational);
        assert_eq!(classify("mailto:x@example.com"), LinkKind::Informational);
    }

    #[test]
    fn test_empty_is_informational() {
        assert_eq!(classify(""), LinkKind::Informational);
    }

    #[test]
    fn test_classify_handles_multibyte_prefixes() {
        // Shorter than the scheme and not char-aligned at the probe length.
        assert_eq!(classify("héé"), LinkKind::Informational);
        assert_eq!(classify("日本語のリンク"), LinkKind::Informational);
    }

    #[test]
    fn test_is_displayable() {
        assert!(is_displayable("https://example.com"));
        assert!(is_displayable("Contact the office"));
        assert!(!is_displayable(""));
        assert!(!is_displayable("   "));
        assert!(!is_displayable("\t\n"));
    }
}
