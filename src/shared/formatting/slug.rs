use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9_\s-]").expect("valid slug character class")
});
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid slug separator pattern"));

/// Derives a URL slug: lowercase ASCII alphanumerics, separator runs collapsed
/// to a single `-`, leading and trailing `-`/`_` stripped.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lowered, "");
    let dashed = SEPARATORS.replace_all(cleaned.trim(), "-");

    dashed.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Normalizes a slug received from a request path before lookup.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Web Design"), "web-design");
    }

    #[test]
    fn slugify_strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  E-Commerce -- Platform (v2)! "), "e-commerce-platform-v2");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Menü"), "caf-men");
    }

    #[test]
    fn slugify_of_symbols_only_is_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn normalize_slug_trims_and_lowercases() {
        assert_eq!(normalize_slug("  My-Project "), "my-project");
    }
}
