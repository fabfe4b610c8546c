//! Value Objects

use crate::error::{CustomerError, CustomerResult};

/// Shortest accepted first or last name, in characters
pub const NAME_MIN_LENGTH: usize = 3;

/// Which half of a name pair a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    fn label(self) -> &'static str {
        match self {
            NameField::First => "First name",
            NameField::Last => "Last name",
        }
    }

    fn required(self) -> CustomerError {
        CustomerError::Validation(format!("{} is required", self.label()))
    }

    fn too_short(self) -> CustomerError {
        CustomerError::Validation(format!(
            "{} must be at least {NAME_MIN_LENGTH} characters",
            self.label()
        ))
    }
}

/// Trimmed, non-empty value or `<Field> is required`
pub fn required_part(value: Option<String>, field: NameField) -> CustomerResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(field.required()),
    }
}

// ============================================================================
// CustomerName
// ============================================================================

/// Validated (first name, last name) pair
///
/// Both parts are trimmed and at least [`NAME_MIN_LENGTH`] characters long.
/// Casing is kept as typed; `full_name` applies smart capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerName {
    first: String,
    last: String,
}

impl CustomerName {
    /// Validate in field order, first violated rule wins
    pub fn new(first: Option<String>, last: Option<String>) -> CustomerResult<Self> {
        let first = Self::part(first, NameField::First)?;
        let last = Self::part(last, NameField::Last)?;
        Ok(Self { first, last })
    }

    fn part(value: Option<String>, field: NameField) -> CustomerResult<String> {
        let value = required_part(value, field)?;
        if value.chars().count() < NAME_MIN_LENGTH {
            return Err(field.too_short());
        }
        Ok(value)
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// Smart-capitalized "First Last"
    pub fn full_name(&self) -> String {
        kernel::name::full_name(&self.first, &self.last)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.first, self.last)
    }
}

// ============================================================================
// Initials
// ============================================================================

/// Lower-cased first characters of a name pair
///
/// Key of the prefix candidate set: two names with the same initials are
/// served by the same store lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Initials {
    first: String,
    last: String,
}

impl Initials {
    /// `None` unless both trimmed names have a first character
    pub fn of(first_name: &str, last_name: &str) -> Option<Self> {
        Some(Self {
            first: Self::initial(first_name)?,
            last: Self::initial(last_name)?,
        })
    }

    fn initial(name: &str) -> Option<String> {
        name.trim()
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// Case-insensitive initials test for a stored name pair
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        Self::of(first_name, last_name).is_some_and(|other| other == *self)
    }
}

// ============================================================================
// SearchQuery
// ============================================================================

/// Default number of records for a "recently modified" search
pub const DEFAULT_RECENT_LIMIT: u32 = 3;

/// Resolved customer search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Literal, case-insensitive substring of the full name
    FullName(String),
    /// Records most recently modified by the caller
    Recent { limit: u32 },
}

impl SearchQuery {
    /// Resolve raw query parameters.
    ///
    /// A non-empty `full_name` wins. Otherwise `limit` must be present; a
    /// value that is not a positive integer falls back to
    /// [`DEFAULT_RECENT_LIMIT`], and the result is capped at `max_limit`.
    pub fn parse(
        full_name: Option<String>,
        limit: Option<String>,
        max_limit: u32,
    ) -> CustomerResult<Self> {
        if let Some(fragment) = full_name.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            return Ok(SearchQuery::FullName(fragment));
        }

        let Some(limit) = limit else {
            return Err(CustomerError::Validation("Please provide query".to_string()));
        };

        let limit = limit
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RECENT_LIMIT);

        Ok(SearchQuery::Recent {
            limit: limit.min(max_limit.max(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_customer_name_trims() {
        let name = CustomerName::new(s("  john "), s(" doe")).unwrap();
        assert_eq!(name.first(), "john");
        assert_eq!(name.last(), "doe");
        assert_eq!(name.full_name(), "John Doe");
    }

    #[test]
    fn test_customer_name_first_violation_wins() {
        let err = CustomerName::new(None, None).unwrap_err();
        assert_eq!(err.to_string(), "First name is required");

        let err = CustomerName::new(s("   "), s("Doe")).unwrap_err();
        assert_eq!(err.to_string(), "First name is required");

        let err = CustomerName::new(s("Jo"), None).unwrap_err();
        assert_eq!(err.to_string(), "First name must be at least 3 characters");

        let err = CustomerName::new(s("John"), s("")).unwrap_err();
        assert_eq!(err.to_string(), "Last name is required");

        let err = CustomerName::new(s("John"), s(" Do ")).unwrap_err();
        assert_eq!(err.to_string(), "Last name must be at least 3 characters");
    }

    #[test]
    fn test_customer_name_counts_chars() {
        // Three characters, six bytes
        assert!(CustomerName::new(s("Ádá"), s("Łoś")).is_ok());
    }

    #[test]
    fn test_initials() {
        let initials = Initials::of(" John", "doe").unwrap();
        assert_eq!(initials.first(), "j");
        assert_eq!(initials.last(), "d");

        assert!(initials.matches("jane", "Dunn"));
        assert!(!initials.matches("Mark", "Doe"));
        assert!(Initials::of("", "Doe").is_none());
        assert!(Initials::of("J", "  ").is_none());
    }

    #[test]
    fn test_search_query_full_name_wins() {
        let query = SearchQuery::parse(s(" doe "), s("10"), 100).unwrap();
        assert_eq!(query, SearchQuery::FullName("doe".to_string()));
    }

    #[test]
    fn test_search_query_limit() {
        assert_eq!(
            SearchQuery::parse(None, s("5"), 100).unwrap(),
            SearchQuery::Recent { limit: 5 }
        );
        assert_eq!(
            SearchQuery::parse(s(""), s("abc"), 100).unwrap(),
            SearchQuery::Recent { limit: 3 }
        );
        assert_eq!(
            SearchQuery::parse(None, s("0"), 100).unwrap(),
            SearchQuery::Recent { limit: 3 }
        );
        assert_eq!(
            SearchQuery::parse(None, s("-2"), 100).unwrap(),
            SearchQuery::Recent { limit: 3 }
        );
        assert_eq!(
            SearchQuery::parse(None, s("5000"), 100).unwrap(),
            SearchQuery::Recent { limit: 100 }
        );
    }

    #[test]
    fn test_search_query_requires_something() {
        let err = SearchQuery::parse(None, None, 100).unwrap_err();
        assert_eq!(err.to_string(), "Please provide query");

        let err = SearchQuery::parse(s("  "), None, 100).unwrap_err();
        assert_eq!(err.to_string(), "Please provide query");
    }
}
