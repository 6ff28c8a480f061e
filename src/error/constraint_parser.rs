use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the error
/// text so uniqueness violations on providers (email, slug) surface as
/// `AppError::Duplicate` instead of an opaque database failure.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in PostgreSQL DETAIL lines
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            table_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation message.
    ///
    /// Tries the constraint name first (e.g. "providers_email_key"),
    /// falling back to the message DETAIL line.
    ///
    /// # Returns
    /// Optional tuple of (entity, field, value) if parsing succeeds
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some((_, value)) = Self::extract_key_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not null constraint violation message.
    ///
    /// # Returns
    /// Optional tuple of (entity, field) if parsing succeeds
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Parses a constraint name into entity and field.
    ///
    /// Handles the usual PostgreSQL naming pattern:
    /// - "providers_email_key" -> ("providers", "email")
    /// - "providers_slug_key" -> ("providers", "slug")
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = constraint_name.split('_').collect();
        if parts.len() >= 3 {
            return Some((parts[0].to_string(), parts[1].to_string()));
        }
        None
    }

    /// Extracts a column name from `column "field_name"` patterns.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts a table name from `table "name"` / `relation "name"` patterns.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts the (field, value) pair from a `Key (field)=(value)` DETAIL line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_with_constraint_name() {
        let message = "duplicate key value violates unique constraint \"providers_email_key\"\nDETAIL: Key (email)=(anna@luxurylooks.example) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("providers_email_key"));
        assert_eq!(
            result,
            Some((
                "providers".to_string(),
                "email".to_string(),
                "anna@luxurylooks.example".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_slug() {
        let message = "duplicate key value violates unique constraint \"providers_slug_key\"\nDETAIL: Key (slug)=(luxury-looks) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("providers_slug_key"));
        assert_eq!(
            result,
            Some((
                "providers".to_string(),
                "slug".to_string(),
                "luxury-looks".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message =
            "duplicate key value violates unique constraint\nDETAIL: Key (slug)=(glow-spa) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "slug".to_string(),
                "glow-spa".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"title\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result, Some(("resource".to_string(), "title".to_string())));
    }

    #[test]
    fn test_parse_not_null_violation_with_relation() {
        let message =
            "null value in column \"title\" of relation \"categories\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(
            result,
            Some(("categories".to_string(), "title".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("providers_email_key"),
            Some(("providers".to_string(), "email".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("invalid"), None);
    }

    #[test]
    fn test_extract_key_value_from_message() {
        let message = "Key (email)=(anna@luxurylooks.example) already exists.";
        assert_eq!(
            ConstraintParser::extract_key_value_from_message(message),
            Some((
                "email".to_string(),
                "anna@luxurylooks.example".to_string()
            ))
        );
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message, None), None);
    }
}
