//! Demo-link validity rule for project cards.
//!
//! Project entries record their demo as a raw URL string. Historically a
//! bare `https://youtube.com` stood in for "no recording exists yet", so the
//! rule here is: an empty string or the bare hosting root (any scheme,
//! optional `www.`, optional trailing slash, no path) means there is no
//! demo. Everything else is a link worth opening.

/// Hosting root that, when used bare, marks a missing demo.
const HOSTING_ROOT: &str = "youtube.com";

/// Classify a raw demo URL from the content table.
///
/// Returns `None` for entries that only look like links, so downstream code
/// deals in an explicit `Option` instead of sentinel strings.
pub fn parse_demo_link(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_bare_hosting_root(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

fn is_bare_hosting_root(url: &str) -> bool {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    rest == HOSTING_ROOT
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_whitespace_mean_no_demo() {
        assert_eq!(parse_demo_link(""), None);
        assert_eq!(parse_demo_link("   "), None);
    }

    #[test]
    fn bare_hosting_roots_mean_no_demo() {
        assert_eq!(parse_demo_link("https://youtube.com"), None);
        assert_eq!(parse_demo_link("https://youtube.com/"), None);
        assert_eq!(parse_demo_link("http://youtube.com"), None);
        assert_eq!(parse_demo_link("https://www.youtube.com"), None);
        assert_eq!(parse_demo_link("http://www.youtube.com/"), None);
    }

    #[test]
    fn pathed_urls_are_valid_demos() {
        assert_eq!(
            parse_demo_link("https://youtu.be/abc123"),
            Some("https://youtu.be/abc123".into())
        );
        assert_eq!(
            parse_demo_link("https://youtube.com/watch?v=abc123"),
            Some("https://youtube.com/watch?v=abc123".into())
        );
    }

    #[test]
    fn unschemed_or_other_hosts_pass_through() {
        assert_eq!(parse_demo_link("youtube.com"), Some("youtube.com".into()));
        assert_eq!(
            parse_demo_link("https://example.com"),
            Some("https://example.com".into())
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            parse_demo_link("  https://youtu.be/x  "),
            Some("https://youtu.be/x".into())
        );
        assert_eq!(parse_demo_link("  https://youtube.com  "), None);
    }
}
