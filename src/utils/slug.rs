use regex::Regex;
use std::sync::OnceLock;

static NON_ALNUM: OnceLock<Regex> = OnceLock::new();

/// Normalizes a company name into a URL-safe slug.
///
/// Lowercases, strips quote characters, collapses every run of
/// non-alphanumeric characters into a single hyphen, and trims leading and
/// trailing hyphens. Used once at provider registration when no explicit
/// slug is supplied; uniqueness is enforced by the database index.
pub fn slugify(input: &str) -> String {
    let re = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let stripped: String = input
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '\u{2019}'))
        .collect();
    let lower = stripped.to_lowercase();
    re.replace_all(&lower, "-").trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_company_name() {
        assert_eq!(slugify("Luxury Looks"), "luxury-looks");
    }

    #[test]
    fn test_slugify_strips_quotes() {
        assert_eq!(slugify("Anna's Salon & Spa"), "annas-salon-spa");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Glow --  Spa!!"), "glow-spa");
    }

    #[test]
    fn test_slugify_trims_edge_hyphens() {
        assert_eq!(slugify("  ~Barber 2 Go~  "), "barber-2-go");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
