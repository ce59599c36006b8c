//! Page file naming.
//!
//! Page files follow the `NNN-slug.toml` convention: an optional numeric
//! prefix that orders the page in navigation, followed by the slug used for
//! its URL.
//!
//! - `010-home.toml` → number 10, slug `home`, title "home"
//! - `020-about-us.toml` → number 20, slug `about-us`, title "about us"
//! - `press-kit.toml` → unnumbered (generated, hidden from nav)

/// Result of parsing a page file stem like `020-about-us`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `20` from `020-about-us`)
    pub number: Option<u32>,
    /// Slug after `NNN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub slug: String,
    /// Display title: slug with dashes converted to spaces.
    pub display_title: String,
}

/// Parse a page file stem following the `NNN-slug` convention.
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-') {
        if let Ok(num) = prefix.parse::<u32>() {
            return ParsedName {
                number: Some(num),
                slug: rest.to_string(),
                display_title: rest.replace('-', " "),
            };
        }
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            slug: String::new(),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        slug: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// Slugs become file names and URLs: lowercase ASCII letters, digits and
/// single inner dashes only.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
