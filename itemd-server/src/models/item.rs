//! Item title validation
//!
//! Titles are trimmed before any other check; a blank title is rejected,
//! matching the `items.title VARCHAR(200) NOT NULL` column.

use super::ValidationError;

/// Maximum length for item titles, in characters.
const MAX_TITLE_LEN: usize = 200;

/// Validated item title: trimmed, non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Create a new item title, trimming surrounding whitespace.
    ///
    /// # Rules
    /// - Must be non-empty after trimming
    /// - At most 200 characters (characters, not bytes, to match the
    ///   VARCHAR(200) column)
    ///
    /// # Example
    /// ```
    /// use itemd_server::models::ItemTitle;
    ///
    /// assert_eq!(ItemTitle::new("  Buy milk  ").unwrap().as_str(), "Buy milk");
    /// assert!(ItemTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
